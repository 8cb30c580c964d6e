use crate::console::LogLevel;
use crate::pipe::core::{LogPipe, PipeResult, run_pipes};
use crate::value::LogValue;
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn prefix_pipe(prefix: &'static str) -> Rc<dyn LogPipe> {
    Rc::new(move |_: LogLevel, args: &[LogValue]| {
        PipeResult::Forward(
            args.iter()
                .map(|arg| LogValue::Str(format!("{prefix}{arg}")))
                .collect(),
        )
    })
}

#[test]
fn runs_pipes_in_order_and_compounds_transforms() {
    // Arrange
    let pipes = vec![prefix_pipe("A"), prefix_pipe("B")];

    // Act
    let result = run_pipes(&pipes, LogLevel::Info, &[LogValue::Str("$".into())]);

    // Assert
    assert_eq!(
        result,
        Some((LogLevel::Info, vec![LogValue::Str("BA$".into())]))
    );
}

#[test]
fn an_empty_forward_suppresses_the_call() {
    // Arrange
    let suppressing: Rc<dyn LogPipe> =
        Rc::new(|_: LogLevel, _: &[LogValue]| PipeResult::Forward(Vec::new()));
    let pipes = vec![suppressing, prefix_pipe("A")];

    // Act
    let result = run_pipes(&pipes, LogLevel::Log, &[LogValue::Str("x".into())]);

    // Assert
    assert_eq!(result, None);
}

#[test]
fn an_empty_rewrite_suppresses_the_call() {
    let rewriting: Rc<dyn LogPipe> = Rc::new(|_: LogLevel, _: &[LogValue]| PipeResult::Rewrite {
        level: LogLevel::Error,
        args: Vec::new(),
    });
    let result = run_pipes(&[rewriting], LogLevel::Log, &[LogValue::Str("x".into())]);
    assert_eq!(result, None);
}

#[test]
fn suppress_stops_before_later_pipes() {
    // Arrange
    let suppressing: Rc<dyn LogPipe> = Rc::new(|_: LogLevel, _: &[LogValue]| PipeResult::Suppress);
    let panicking: Rc<dyn LogPipe> = Rc::new(|_: LogLevel, _: &[LogValue]| -> PipeResult {
        panic!("must not run");
    });

    // Act
    let result = run_pipes(
        &[suppressing, panicking],
        LogLevel::Log,
        &[LogValue::Str("x".into())],
    );

    // Assert
    assert_eq!(result, None);
}

#[test]
fn a_rewrite_changes_the_level_for_later_pipes() {
    // Arrange
    let rewriting: Rc<dyn LogPipe> = Rc::new(|_: LogLevel, args: &[LogValue]| PipeResult::Rewrite {
        level: LogLevel::Debug,
        args: args.to_vec(),
    });
    let asserting: Rc<dyn LogPipe> = Rc::new(|level: LogLevel, args: &[LogValue]| {
        assert_eq!(level, LogLevel::Debug);
        PipeResult::Forward(args.to_vec())
    });

    // Act
    let result = run_pipes(
        &[rewriting, asserting],
        LogLevel::Warn,
        &[LogValue::Str("x".into())],
    );

    // Assert
    assert_eq!(
        result,
        Some((LogLevel::Debug, vec![LogValue::Str("x".into())]))
    );
}

#[test]
fn an_empty_chain_passes_the_call_through() {
    let result = run_pipes(&[], LogLevel::Trace, &[LogValue::Int(1)]);
    assert_eq!(result, Some((LogLevel::Trace, vec![LogValue::Int(1)])));
}
