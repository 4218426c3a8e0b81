use clap::Parser;
use schemagen::config::{FileConfig, GenerateSettings, DEFAULT_SEED};
use schemagen::{GenerateArgs, ValidateArgs};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
struct GenerateCli {
    #[command(flatten)]
    args: GenerateArgs,
}

#[derive(Parser)]
struct ValidateCli {
    #[command(flatten)]
    args: ValidateArgs,
}

#[test]
fn test_generate_args_minimal() {
    let cli = GenerateCli::try_parse_from(["schemagen", "--schema", "user.json"]).unwrap();

    assert_eq!(cli.args.schema, PathBuf::from("user.json"));
    assert_eq!(cli.args.count, None);
    assert!(!cli.args.all_fields);
    assert!(!cli.args.pretty);
    assert!(cli.args.output.is_none());
}

#[test]
fn test_generate_args_full() {
    let cli = GenerateCli::try_parse_from([
        "schemagen",
        "-s",
        "order.yaml",
        "--seed",
        "9",
        "--max-depth",
        "4",
        "--all-fields",
        "-n",
        "25",
        "--pretty",
        "--timeout",
        "250ms",
        "-o",
        "out.jsonl",
    ])
    .unwrap();

    assert_eq!(cli.args.seed, Some(9));
    assert_eq!(cli.args.max_depth, Some(4));
    assert!(cli.args.all_fields);
    assert_eq!(cli.args.count, Some(25));
    assert!(cli.args.pretty);
    assert_eq!(cli.args.output, Some(PathBuf::from("out.jsonl")));

    let settings = GenerateSettings::merge(&cli.args, FileConfig::default()).unwrap();
    assert_eq!(settings.generator.seed, 9);
    assert_eq!(settings.generator.max_depth, 4);
    assert!(settings.generator.generate_all_fields);
    assert_eq!(settings.count, 25);
    assert_eq!(settings.timeout, Some(Duration::from_millis(250)));
}

#[test]
fn test_generate_requires_schema() {
    assert!(GenerateCli::try_parse_from(["schemagen"]).is_err());
}

#[test]
fn test_generate_rejects_negative_seed() {
    assert!(GenerateCli::try_parse_from(["schemagen", "--schema", "a.json", "--seed", "-1"]).is_err());
}

#[test]
fn test_default_settings() {
    let cli = GenerateCli::try_parse_from(["schemagen", "--schema", "user.json"]).unwrap();
    let settings = GenerateSettings::merge(&cli.args, FileConfig::default()).unwrap();
    assert_eq!(settings.count, 1);
    // Only holds when SCHEMAGEN_SEED is unset in the test environment
    if std::env::var_os("SCHEMAGEN_SEED").is_none() {
        assert_eq!(settings.generator.seed, DEFAULT_SEED);
    }
}

#[test]
fn test_validate_args() {
    let cli = ValidateCli::try_parse_from(["schemagen", "--schema", "user.json"]).unwrap();
    assert_eq!(cli.args.schema, PathBuf::from("user.json"));
}
