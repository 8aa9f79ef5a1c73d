#![allow(dead_code)]

use automap::Entity;

#[derive(Entity)]
struct Pair(i32, String);

fn main() {}
