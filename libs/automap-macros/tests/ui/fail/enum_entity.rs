#![allow(dead_code)]

use automap::Entity;

#[derive(Entity)]
enum Status {
    Active,
    Retired,
}

fn main() {}
