use chrono::{TimeZone, Utc};
use clap::Parser;
use etg::cli::{decode_output, preview_output, render_output, Cli, Commands};
use etg::timestamp::{FormatEngine, PatternFormatter};

const MOMENT: i64 = 1_700_000_000;

fn utc_engine() -> FormatEngine<PatternFormatter> {
    FormatEngine::new(PatternFormatter::utc())
}

#[test]
fn test_decode_output() {
    assert_eq!(decode_output("<t:1700000000:R>").unwrap(), "1700000000 R (Relative Time)");
    assert_eq!(decode_output(" <t:-5:d> ").unwrap(), "-5 d (Short Date)");
    assert!(decode_output("<t:1700000000:x>").is_err());
    assert!(decode_output("1700000000").is_err());
}

#[test]
fn test_render_output() {
    let engine = utc_engine();
    let now = Utc.timestamp_opt(MOMENT - 90, 0).unwrap();

    assert_eq!(render_output(&engine, "<t:1700000000:R>", now).unwrap(), "in 2 minutes");
    assert_eq!(render_output(&engine, "<t:1700000000:t>", now).unwrap(), "10:13 PM");

    let err = render_output(&engine, "<t:oops:R>", now).unwrap_err();
    assert!(err.to_string().contains("Failed to render"));
}

#[test]
fn test_preview_output_table() {
    let engine = utc_engine();
    let now = Utc.timestamp_opt(MOMENT, 0).unwrap();
    let table = preview_output(&engine, MOMENT, now, false).unwrap();

    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("<t:1700000000:t>"));
    assert!(lines[0].ends_with("10:13 PM"));
    assert!(lines[6].starts_with("<t:1700000000:R>"));
    assert!(lines[6].ends_with("just now"));
}

#[test]
fn test_preview_output_json() {
    let engine = utc_engine();
    let now = Utc.timestamp_opt(MOMENT + 3 * 86_400, 0).unwrap();
    let json = preview_output(&engine, MOMENT, now, true).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 7);
    assert_eq!(object["D"], "November 14, 2023");
    assert_eq!(object["F"], "Tuesday, November 14, 2023 at 10:13 PM");
    assert_eq!(object["R"], "3 days ago");
}

#[test]
fn test_parse_subcommands() {
    let cli = Cli::try_parse_from(["etg", "encode", "--at", "2025-01-15T14:30", "-f", "R"]).unwrap();
    match cli.command {
        Some(Commands::Encode(args)) => {
            assert_eq!(args.at.as_deref(), Some("2025-01-15T14:30"));
            assert_eq!(args.format, 'R');
            assert!(!args.copy);
        }
        other => panic!("unexpected command: {other:?}"),
    }

    let cli = Cli::try_parse_from(["etg", "--timezone", "utc", "preview", "--json"]).unwrap();
    assert_eq!(cli.timezone.as_deref(), Some("utc"));
    assert!(matches!(cli.command, Some(Commands::Preview(ref args)) if args.json));

    let cli = Cli::try_parse_from(["etg"]).unwrap();
    assert!(cli.command.is_none());
}
