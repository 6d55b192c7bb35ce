// Environment-variable configuration loading. Kept to a single test function
// because the process environment is shared across test threads.

use serde_json::Value;
use std::env;

use toman::Config;

#[test]
fn test_config_from_env() {
    env::set_var("TOMAN_MERCHANT_ID", "M-env");
    env::set_var("TOMAN_SANDBOX", "true");
    env::set_var("TOMAN_CALLBACK_URL", "https://shop.example/cb");
    env::set_var("TOMAN_DESCRIPTION", "Pay :amount");

    let config = Config::from_env();
    assert_eq!(config.merchant_id.as_deref(), Some("M-env"));
    assert_eq!(config.sandbox, Some(Value::Bool(true)));
    assert_eq!(
        config.callback_url.as_deref(),
        Some("https://shop.example/cb")
    );
    assert_eq!(config.description.as_deref(), Some("Pay :amount"));
    assert!(config.is_sandbox().unwrap());

    // Non-boolean sandbox values survive loading and fail interpretation
    env::set_var("TOMAN_SANDBOX", "yes");
    let config = Config::from_env();
    assert_eq!(config.sandbox, Some(Value::String("yes".to_string())));
    assert!(config.is_sandbox().is_err());

    // Absent variables leave the defaults unset
    env::remove_var("TOMAN_MERCHANT_ID");
    env::remove_var("TOMAN_SANDBOX");
    env::remove_var("TOMAN_CALLBACK_URL");
    env::remove_var("TOMAN_DESCRIPTION");

    let config = Config::from_env();
    assert_eq!(config.merchant_id, None);
    assert_eq!(config.sandbox, None);
    assert!(!config.is_sandbox().unwrap());
}
