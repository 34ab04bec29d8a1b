mod franchise;
mod game;
