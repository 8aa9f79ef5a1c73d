#![allow(dead_code)]

use automap::Entity;

#[derive(Entity)]
#[automap(table = 42)]
struct Invoice {
    id: i64,
}

fn main() {}
