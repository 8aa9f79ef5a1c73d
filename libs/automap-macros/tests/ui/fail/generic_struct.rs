#![allow(dead_code)]

use automap::Entity;

#[derive(Entity)]
struct Envelope<T> {
    payload: T,
}

fn main() {}
