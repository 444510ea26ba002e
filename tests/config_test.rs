use lektorcli::{Res, config};

#[tokio::test]
async fn test_load_env_returns_res() {
    // Whether or not a .env file exists, loading reports through the
    // crate-wide Res alias instead of panicking
    let result: Res<()> = config::load_env().await;
    let _ = result;
}

#[test]
fn test_verify_certificates_parsing() {
    unsafe { std::env::set_var("JELLYFIN_VERIFY_CERTIFICATES", "true") };
    assert!(config::verify_certificates());

    unsafe { std::env::set_var("JELLYFIN_VERIFY_CERTIFICATES", "1") };
    assert!(config::verify_certificates());

    unsafe { std::env::set_var("JELLYFIN_VERIFY_CERTIFICATES", "0") };
    assert!(!config::verify_certificates());

    // Unset defaults to trusting any certificate
    unsafe { std::env::remove_var("JELLYFIN_VERIFY_CERTIFICATES") };
    assert!(!config::verify_certificates());
}
