mod character;
mod game_match;
mod user;
mod wildcard;
