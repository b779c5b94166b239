use std::process::{Command, Output};

fn run_binary(envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_atomic_counter"));
    cmd.current_dir(env!("CARGO_TARGET_TMPDIR"))
        .env_remove("RUST_LOG")
        .env_remove("ATOMIC_COUNTER_START")
        .env_remove("ATOMIC_COUNTER_STEP")
        .env_remove("ATOMIC_COUNTER_ITERATIONS")
        .envs(envs.iter().copied());

    cmd.output().expect("failed to run atomic_counter binary")
}

#[test]
fn default_run_is_silent_and_succeeds() {
    let out = run_binary(&[]);

    assert!(out.status.success(), "status = {:?}", out.status);
    assert!(
        out.stdout.is_empty(),
        "stdout = {:?}",
        String::from_utf8_lossy(&out.stdout)
    );
}

#[test]
fn overflowing_environment_fails() {
    let out = run_binary(&[
        ("ATOMIC_COUNTER_STEP", "4294967295"),
        ("ATOMIC_COUNTER_ITERATIONS", "2"),
    ]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("do not fit in a u32"));
}

#[test]
fn invalid_environment_fails() {
    let out = run_binary(&[("ATOMIC_COUNTER_START", "-1")]);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn debug_logging_reports_the_final_value_on_stderr() {
    let out = run_binary(&[("RUST_LOG", "debug")]);

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("finished"));
}
