use automap::Entity;

#[derive(Entity)]
struct Ping;

#[derive(Entity)]
#[allow(dead_code)]
struct Reserved {
    r#type: String,
    r#match: &'static str,
}

fn main() {
    assert!(Ping::descriptor().properties().is_empty());

    let names: Vec<_> = Reserved::descriptor()
        .properties()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(names, ["type", "match"]);
}
