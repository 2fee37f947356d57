use alias_registry::AliasRegistry;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let registry = AliasRegistry::new();

    registry.register("dataSource", "db-${env}").unwrap();
    registry.register("db-${env}", "primaryDb").unwrap();
    println!("primaryDb -> {}", registry.canonical_name("primaryDb"));
    println!("aliases of dataSource: {:?}", registry.get_aliases("dataSource"));

    if let Err(err) = registry.register("primaryDb", "dataSource") {
        println!("rejected: {err}");
    }

    registry
        .apply_rename(&|value: &str| Some(value.replace("${env}", "prod")))
        .unwrap();
    println!("after rename: {:?}", registry.snapshot());
}
