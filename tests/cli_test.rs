//! Binary entrypoint: listing customers works without any model artifacts.

use std::process::Command;

const CSV: &str = "\
RowNumber,CustomerId,Surname,CreditScore,Geography,Gender,Age,Tenure,Balance,NumOfProducts,HasCrCard,IsActiveMember,EstimatedSalary,Exited
1,15634602,Hargrave,619,France,Female,42,2,0.0,1,1,1,101348.88,1
2,15647311,Hill,608,Spain,Female,41,1,83807.86,1,0,1,112542.58,0
";

fn write_config(dir: &std::path::Path) -> std::path::PathBuf {
    let data = dir.join("churn.csv");
    std::fs::write(&data, CSV).unwrap();
    let config = serde_json::json!({
        "data_path": data,
        "models": [
            {"name": "XGBoost", "path": dir.join("missing.onnx"), "required": true, "ensemble": true}
        ],
    });
    let path = dir.join("config.json");
    std::fs::write(&path, config.to_string()).unwrap();
    path
}

#[test]
fn lists_customers_when_required_model_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_churn-dashboard"))
        .env("CHURN_CONFIG_PATH", &config)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "15634602 - Hargrave\n15647311 - Hill\n");
}

#[test]
fn selecting_a_customer_needs_required_models() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_churn-dashboard"))
        .env("CHURN_CONFIG_PATH", &config)
        .arg("15647311")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
