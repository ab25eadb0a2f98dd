use buch_client::config::BuchClientConfig;

#[test]
fn test_default_config() {
    let config = BuchClientConfig::default();
    assert_eq!(config.backend.base_url, "https://localhost:3000");
    assert_eq!(config.backend.rest_path, "/rest");
    assert!(!config.backend.accept_invalid_certs);
    assert_eq!(config.search.page_size, 10);
}

#[test]
fn test_get_default_config_paths() {
    let paths = BuchClientConfig::get_default_config_paths();

    // Should always include current directory paths
    assert!(paths.iter().any(|p| p.ends_with("buch-client.toml")));
    assert!(paths.iter().any(|p| p.ends_with("config/buch-client.toml")));
    assert!(paths.len() >= 2);
}

#[test]
fn test_load_without_a_file_falls_back_to_defaults() {
    let config =
        BuchClientConfig::load_with_file(Some("does-not-exist.toml")).expect("defaults load");
    assert_eq!(config.search.page_size, 10);
}
