use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique so a user can never own two characters, even under concurrent creates.
    #[sea_orm(unique)]
    pub user_id: i32,
    pub name: String,
    pub position: String,
    pub age: Option<i32>,
    pub height: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub player_class: Option<String>,
    pub subclass: Option<String>,
    pub weapon: Option<String>,
    pub motivation: Option<String>,
    pub origin: Option<String>,
    pub avatar: Option<String>,
    pub level: i32,
    pub experience: i32,
    pub matches: i32,
    pub goals: i32,
    pub ranking: i32,
    pub is_eliminated: bool,
    pub speed: i32,
    pub strength: i32,
    pub stamina: i32,
    pub shooting: i32,
    pub passing: i32,
    pub dribbling: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
