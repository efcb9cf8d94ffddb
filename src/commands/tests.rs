//! Tests for the command dispatcher.

use super::*;
use crate::error::BridgeError;
use crate::test_support::{create_test_repo, install_fake_ralph, recorded_invocation};
use clap::Parser;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    let argv = std::iter::once("ralph-bridge").chain(args.iter().copied());
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_no_action_prints_help_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());

    let code = dispatch(&parse(&["--dry-run"]), &ctx).unwrap();

    assert_eq!(code, exit_codes::USER_ERROR);
}

#[test]
fn test_no_action_prints_help_even_with_broken_config() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    std::fs::create_dir_all(&ctx.ralph_dir).unwrap();
    std::fs::write(ctx.bridge_config_path(), "max_iterations: [not, a, number]\n").unwrap();

    let code = dispatch(&parse(&[]), &ctx).unwrap();

    assert_eq!(code, exit_codes::USER_ERROR);
}

#[test]
fn test_broken_config_fails_requested_action() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    std::fs::create_dir_all(&ctx.ralph_dir).unwrap();
    std::fs::write(ctx.bridge_config_path(), "max_iterations: [not, a, number]\n").unwrap();

    let err = dispatch(&parse(&["--check"]), &ctx).unwrap_err();

    assert!(matches!(err, BridgeError::ConfigError(_)));
}

#[test]
fn test_empty_plan_description_alone_prints_help() {
    let temp_dir = create_test_repo();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    install_fake_ralph(temp_dir.path(), 0);

    let code = dispatch(&parse(&["--plan", ""]), &ctx).unwrap();

    assert_eq!(code, exit_codes::USER_ERROR);
    assert!(recorded_invocation(temp_dir.path()).is_none());
}

#[test]
fn test_empty_plan_description_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), 0);

    let cli = parse(&["--plan", "", "--generate", "--title", "Feature", "--tasks", "a"]);
    let code = run_actions(&cli, &ctx, &config).unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    assert!(ctx.prompt_path.exists());
    assert!(recorded_invocation(temp_dir.path()).is_none());
}

#[test]
fn test_check_passes_in_ready_repo() {
    let temp_dir = create_test_repo();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), 0);

    let code = run_actions(&parse(&["--check"]), &ctx, &config).unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
}

#[test]
fn test_check_fails_outside_repo() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), 0);

    let code = run_actions(&parse(&["--check"]), &ctx, &config).unwrap();

    assert_eq!(code, exit_codes::USER_ERROR);
}

#[test]
fn test_check_short_circuits_other_actions() {
    let temp_dir = create_test_repo();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), 0);

    let cli = parse(&["--check", "--generate", "--title", "T", "--tasks", "a", "--run"]);
    let code = run_actions(&cli, &ctx, &config).unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    assert!(!ctx.prompt_path.exists());
    assert!(recorded_invocation(temp_dir.path()).is_none());
}

#[test]
fn test_generate_without_title_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());

    let err = run_actions(&parse(&["--generate", "--tasks", "a"]), &ctx, &Config::default())
        .unwrap_err();

    assert!(matches!(err, BridgeError::UserError(_)));
    assert_eq!(err.to_string(), "--generate requires --title");
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    assert!(!ctx.prompt_path.exists());
}

#[test]
fn test_generate_with_blank_title_fails() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());

    let cli = parse(&["--generate", "--title", "", "--tasks", "a"]);
    let err = run_actions(&cli, &ctx, &Config::default()).unwrap_err();

    assert_eq!(err.to_string(), "--generate requires --title");
    assert!(!ctx.prompt_path.exists());
}

#[test]
fn test_generate_accepts_whitespace_title() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());

    let cli = parse(&["--generate", "--title", " ", "--tasks", "a"]);
    let code = run_actions(&cli, &ctx, &Config::default()).unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    assert!(std::fs::read_to_string(&ctx.prompt_path).unwrap().starts_with("#  \n"));
}

#[test]
fn test_generate_without_tasks_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());

    let err = run_actions(&parse(&["--generate", "--title", "Feature"]), &ctx, &Config::default())
        .unwrap_err();

    assert_eq!(err.to_string(), "--generate requires --tasks");
    assert!(!ctx.prompt_path.exists());
}

#[test]
fn test_generate_writes_prompt() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());

    let cli = parse(&["--generate", "--title", "Feature", "--tasks", "task1", "task2"]);
    let code = run_actions(&cli, &ctx, &Config::default()).unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    let written = std::fs::read_to_string(&ctx.prompt_path).unwrap();
    assert!(written.starts_with("# Feature\n"));
    assert!(written.contains("- [ ] task1\n- [ ] task2\n"));
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());

    let cli = parse(&["--generate", "--title", "Feature", "--tasks", "a", "--dry-run"]);
    let code = run_actions(&cli, &ctx, &Config::default()).unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    assert!(!ctx.prompt_path.exists());
}

#[test]
fn test_run_without_prompt_reports_failure_and_never_starts_ralph() {
    let temp_dir = create_test_repo();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), 0);

    let code = run_actions(&parse(&["--run"]), &ctx, &config).unwrap();

    assert_eq!(code, exit_codes::USER_ERROR);
    assert!(recorded_invocation(temp_dir.path()).is_none());
}

#[test]
fn test_run_in_unready_environment_never_starts_ralph() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), 0);
    std::fs::write(&ctx.prompt_path, "# Feature\n").unwrap();

    let code = run_actions(&parse(&["--run"]), &ctx, &config).unwrap();

    assert_eq!(code, exit_codes::USER_ERROR);
    assert!(recorded_invocation(temp_dir.path()).is_none());
}

#[test]
fn test_run_dry_run_still_validates() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), 0);

    let code = run_actions(&parse(&["--run", "--dry-run"]), &ctx, &config).unwrap();

    assert_eq!(code, exit_codes::USER_ERROR);
    assert!(recorded_invocation(temp_dir.path()).is_none());
}

#[test]
fn test_full_dry_run_returns_zero_and_starts_nothing() {
    let temp_dir = create_test_repo();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), 2);

    let cli = parse(&[
        "--generate", "--title", "Feature", "--tasks", "a", "--plan", "Add auth", "--run",
        "--dry-run",
    ]);
    let code = run_actions(&cli, &ctx, &config).unwrap();

    assert_eq!(code, exit_codes::SUCCESS);
    assert!(!ctx.prompt_path.exists());
    assert!(recorded_invocation(temp_dir.path()).is_none());
}

#[cfg(unix)]
#[test]
fn test_generate_then_run_uses_config_defaults() {
    let temp_dir = create_test_repo();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = Config {
        max_iterations: 12,
        backend: "kiro".to_string(),
        ..install_fake_ralph(temp_dir.path(), exit_codes::LOOP_COMPLETE)
    };

    let cli = parse(&["--generate", "--title", "Feature", "--tasks", "a", "--run"]);
    let code = run_actions(&cli, &ctx, &config).unwrap();

    assert_eq!(code, exit_codes::LOOP_COMPLETE);
    assert!(ctx.prompt_path.exists());
    assert_eq!(
        recorded_invocation(temp_dir.path()).unwrap(),
        vec!["run", "-a", "--max-iterations", "12", "-b", "kiro"]
    );
}

#[cfg(unix)]
#[test]
fn test_run_flags_override_config_and_exit_code_passes_through() {
    let temp_dir = create_test_repo();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), exit_codes::LOOP_INTERRUPTED);
    std::fs::write(&ctx.prompt_path, "# Feature\n").unwrap();

    let cli = parse(&["--run", "--max-iterations", "3", "--backend", "gemini"]);
    let code = run_actions(&cli, &ctx, &config).unwrap();

    assert_eq!(code, exit_codes::LOOP_INTERRUPTED);
    assert_eq!(
        recorded_invocation(temp_dir.path()).unwrap(),
        vec!["run", "-a", "--max-iterations", "3", "-b", "gemini"]
    );
}

#[cfg(unix)]
#[test]
fn test_failed_plan_stops_before_run() {
    let temp_dir = create_test_repo();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), 4);
    std::fs::write(&ctx.prompt_path, "# Feature\n").unwrap();

    let code = run_actions(&parse(&["--plan", "Add auth", "--run"]), &ctx, &config).unwrap();

    assert_eq!(code, 4);
    assert_eq!(
        recorded_invocation(temp_dir.path()).unwrap(),
        vec!["plan", "Add auth"]
    );
}

#[cfg(unix)]
#[test]
fn test_successful_plan_continues_to_run() {
    let temp_dir = create_test_repo();
    let ctx = ProjectContext::resolve_from(temp_dir.path());
    let config = install_fake_ralph(temp_dir.path(), 0);
    std::fs::write(&ctx.prompt_path, "# Feature\n").unwrap();

    let code = run_actions(&parse(&["--plan", "Add auth", "--run"]), &ctx, &config).unwrap();

    assert_eq!(code, 0);
    let log = recorded_invocation(temp_dir.path()).unwrap();
    assert_eq!(log[..2], ["plan", "Add auth"]);
    assert_eq!(log[2], "run");
}
