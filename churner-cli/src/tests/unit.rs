//! Focused unit tests covering CLI configuration and command output.

use super::helpers::{BrokenCatalogueLoader, listing_slugs, parse_output, sample_loader};
use super::*;
use crate::loader::ExportCatalogueLoader;
use camino::Utf8PathBuf;
use churner_core::RewardsProgram;
use churner_data::CatalogueError;
use rstest::rstest;
use tempfile::TempDir;

fn rank_args(program: Option<&str>) -> rank::RankArgs {
    rank::RankArgs {
        cards: Some(Utf8PathBuf::from("cards.json")),
        program: program.map(str::to_owned),
    }
}

fn show_args(issuer_slug: &str, card_slug: &str) -> show::ShowArgs {
    show::ShowArgs {
        issuer_slug: Some(issuer_slug.to_owned()),
        card_slug: Some(card_slug.to_owned()),
        cards: Some(Utf8PathBuf::from("cards.json")),
    }
}

#[rstest]
fn converting_rank_without_cards_errors() {
    let args = rank::RankArgs {
        cards: None,
        ..rank::RankArgs::default()
    };

    let err = RankConfig::try_from(args).expect_err("missing cards should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CARDS);
            assert_eq!(env, ENV_RANK_CARDS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(None, RewardsProgram::Qantas)]
#[case(Some("velocity"), RewardsProgram::Velocity)]
#[case(Some(" QANTAS "), RewardsProgram::Qantas)]
fn rank_config_resolves_program(
    #[case] program: Option<&str>,
    #[case] expected: RewardsProgram,
) {
    let config = RankConfig::try_from(rank_args(program)).expect("config should build");
    assert_eq!(config.program, expected);
    assert_eq!(config.cards, Utf8PathBuf::from("cards.json"));
}

#[rstest]
fn rank_config_rejects_unknown_program() {
    let err = RankConfig::try_from(rank_args(Some("krisflyer"))).expect_err("unknown program");
    match err {
        CliError::UnknownProgram(source) => assert_eq!(source.name, "krisflyer"),
        other => panic!("expected UnknownProgram, found {other:?}"),
    }
}

#[rstest]
#[case::missing_issuer(None, Some("gold"), ARG_ISSUER_SLUG, ENV_SHOW_ISSUER_SLUG)]
#[case::missing_card(Some("acme-bank"), None, ARG_CARD_SLUG, ENV_SHOW_CARD_SLUG)]
fn converting_show_without_slugs_errors(
    #[case] issuer_slug: Option<&str>,
    #[case] card_slug: Option<&str>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let args = show::ShowArgs {
        issuer_slug: issuer_slug.map(str::to_owned),
        card_slug: card_slug.map(str::to_owned),
        cards: Some(Utf8PathBuf::from("cards.json")),
    };

    let err = ShowConfig::try_from(args).expect_err("missing slug should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_show_without_cards_errors() {
    let args = show::ShowArgs {
        cards: None,
        ..show_args("acme-bank", "gold")
    };

    let err = ShowConfig::try_from(args).expect_err("missing cards should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CARDS);
            assert_eq!(env, ENV_SHOW_CARDS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "cards": "from-file.json", "program": "velocity" }),
        None,
    );
    composer.push_environment(json!({ "cards": "from-env.json" }));
    composer.push_cli(json!({ "program": "qantas" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.cards, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.program, RewardsProgram::Qantas);
}

#[rstest]
fn merge_layers_reports_invalid_values_as_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "cards": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn rank_writes_listings_best_first() {
    let mut stdout = Vec::new();

    run_rank_with(rank_args(None), &sample_loader(), &mut stdout).expect("rank should succeed");

    let output = parse_output(&stdout);
    assert_eq!(listing_slugs(&output), ["platinum", "gold", "silver"]);
    let best = &output[0];
    assert_eq!(best["rewardsProgram"], "qantas");
    assert_eq!(best["bonusPoints"], 90_000);
    assert_eq!(best["hasMultiplePrograms"], true);
}

#[rstest]
fn rank_for_a_program_without_cards_writes_an_empty_array() {
    let loader = super::helpers::StubCatalogueLoader {
        catalogue: churner_data::Catalogue::default(),
    };
    let mut stdout = Vec::new();

    run_rank_with(rank_args(Some("velocity")), &loader, &mut stdout)
        .expect("rank should succeed");

    assert_eq!(parse_output(&stdout), serde_json::json!([]));
}

#[rstest]
fn show_writes_the_matching_card() {
    let mut stdout = Vec::new();

    run_show_with(show_args("acme-bank", "gold"), &sample_loader(), &mut stdout)
        .expect("show should succeed");

    let output = parse_output(&stdout);
    assert_eq!(output["slug"], "gold");
    assert_eq!(output["issuer"]["slug"], "acme-bank");
}

#[rstest]
#[case::unknown_card("acme-bank", "titanium")]
#[case::unknown_issuer("zenith-bank", "gold")]
fn show_reports_unknown_cards(#[case] issuer_slug: &str, #[case] card_slug: &str) {
    let mut stdout = Vec::new();

    let err = run_show_with(show_args(issuer_slug, card_slug), &sample_loader(), &mut stdout)
        .expect_err("unknown card should fail");

    match err {
        CliError::CardNotFound {
            issuer_slug: issuer,
            card_slug: card,
            ..
        } => {
            assert_eq!(issuer, issuer_slug);
            assert_eq!(card, card_slug);
        }
        other => panic!("expected CardNotFound, found {other:?}"),
    }
    assert!(stdout.is_empty());
}

#[rstest]
fn loader_failures_are_propagated() {
    let mut stdout = Vec::new();

    let err = run_rank_with(rank_args(None), &BrokenCatalogueLoader, &mut stdout)
        .expect_err("broken export should fail");

    match err {
        CliError::LoadCatalogue {
            source: CatalogueError::Parse { .. },
            ..
        } => {}
        other => panic!("expected LoadCatalogue, found {other:?}"),
    }
}

#[rstest]
fn export_loader_reports_missing_files() {
    let tmp = TempDir::new().expect("tempdir");
    let path = Utf8PathBuf::from_path_buf(tmp.path().join("cards.json")).expect("utf-8 path");

    let err = ExportCatalogueLoader
        .load(&path)
        .expect_err("missing export should fail");

    match err {
        CliError::LoadCatalogue {
            path: reported,
            source: CatalogueError::Open { .. },
        } => assert_eq!(reported, path),
        other => panic!("expected LoadCatalogue, found {other:?}"),
    }
}

#[rstest]
fn load_errors_name_each_layer_once() {
    use std::error::Error;

    let tmp = TempDir::new().expect("tempdir");
    let path = Utf8PathBuf::from_path_buf(tmp.path().join("cards.json")).expect("utf-8 path");
    let err = ExportCatalogueLoader
        .load(&path)
        .expect_err("missing export should fail");

    let mut messages = vec![err.to_string()];
    let mut cause = err.source();
    while let Some(source) = cause {
        messages.push(source.to_string());
        cause = source.source();
    }

    assert_eq!(messages.first(), Some(&format!("failed to load card export at {path}")));
    assert_eq!(
        messages.get(1),
        Some(&format!("failed to open card export at {path}"))
    );
    for (position, message) in messages.iter().enumerate() {
        for later in messages.iter().skip(position + 1) {
            assert!(
                !message.contains(later.as_str()),
                "{message:?} repeats its cause {later:?}"
            );
        }
    }
}

#[rstest]
fn write_failures_surface_as_output_errors() {
    struct ClosedPipe;

    impl std::io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = run_rank_with(rank_args(None), &sample_loader(), &mut ClosedPipe)
        .expect_err("closed pipe should fail");

    assert!(matches!(err, CliError::WriteOutput(_)));
}
