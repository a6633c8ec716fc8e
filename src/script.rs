//! Editor scripts: a line-oriented replay of user events.
//!
//! Each non-blank line that does not start with `#` is one event, split with
//! shell quoting rules so values may contain spaces:
//!
//! ```text
//! # load a template, then tweak it
//! template headline-generation 0
//! temperature 0.8
//! stop add "\n\n"
//! prompt "Topic: cats, boxes\nHeadline:"
//! undo
//! ```
//!
//! Inside double quotes a backslash only escapes `"`, `\`, `$` and the
//! backtick, so `"\n"` arrives as the two characters `\n`: the same form users
//! type into the stop-symbol field.

use crate::editor::EditorAction;
use crate::error::{PromptpadError, Result};
use crate::session::Session;
use crate::templates::Catalog;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Action(EditorAction),
    Template {
        id: String,
        example: Option<usize>,
    },
    Undo,
    Redo,
}

/// A script command together with the line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

/// Parse a whole script. Errors name the offending (1-based) line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>> {
    let mut commands = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = parse_line(trimmed)
            .map_err(|msg| PromptpadError::UserError(format!("script line {}: {}", line, msg)))?;
        commands.push(ScriptLine { line, command });
    }

    Ok(commands)
}

fn parse_line(line: &str) -> std::result::Result<ScriptCommand, String> {
    let words = shell_words::split(line).map_err(|e| format!("cannot split '{}': {}", line, e))?;
    let (keyword, args) = words
        .split_first()
        .ok_or_else(|| "empty command".to_string())?;

    let command = match keyword.as_str() {
        "prompt" => ScriptCommand::Action(EditorAction::EditPrompt(single_arg(keyword, args)?)),
        "api-key" => ScriptCommand::Action(EditorAction::EditApiKey(single_arg(keyword, args)?)),
        "temperature" => {
            ScriptCommand::Action(EditorAction::EditTemperature(float_arg(keyword, args)?))
        }
        "top-p" => ScriptCommand::Action(EditorAction::EditTopP(float_arg(keyword, args)?)),
        "frequency-penalty" => {
            ScriptCommand::Action(EditorAction::EditFrequencyPenalty(float_arg(keyword, args)?))
        }
        "presence-penalty" => {
            ScriptCommand::Action(EditorAction::EditPresencePenalty(float_arg(keyword, args)?))
        }
        "max-tokens" => {
            let value = single_arg(keyword, args)?;
            let tokens = value
                .parse::<i64>()
                .map_err(|_| format!("max-tokens expects an integer, got '{}'", value))?;
            ScriptCommand::Action(EditorAction::EditMaxTokens(tokens))
        }
        "stop" => parse_stop(args)?,
        "template" => parse_template(args)?,
        "undo" => no_args(keyword, args, ScriptCommand::Undo)?,
        "redo" => no_args(keyword, args, ScriptCommand::Redo)?,
        other => return Err(format!("unknown command '{}'", other)),
    };

    Ok(command)
}

fn parse_stop(args: &[String]) -> std::result::Result<ScriptCommand, String> {
    match args {
        [op, symbol] if op == "add" => Ok(ScriptCommand::Action(EditorAction::AddStopSymbol(
            symbol.clone(),
        ))),
        [op, symbol] if op == "delete" => Ok(ScriptCommand::Action(
            EditorAction::DeleteStopSymbol(symbol.clone()),
        )),
        _ => Err("usage: stop add|delete <symbol>".to_string()),
    }
}

fn parse_template(args: &[String]) -> std::result::Result<ScriptCommand, String> {
    match args {
        [id] => Ok(ScriptCommand::Template {
            id: id.clone(),
            example: None,
        }),
        [id, index] => {
            let example = index
                .parse::<usize>()
                .map_err(|_| format!("example index must be a non-negative integer, got '{}'", index))?;
            Ok(ScriptCommand::Template {
                id: id.clone(),
                example: Some(example),
            })
        }
        _ => Err("usage: template <id> [example-index]".to_string()),
    }
}

fn single_arg(keyword: &str, args: &[String]) -> std::result::Result<String, String> {
    match args {
        [value] => Ok(value.clone()),
        _ => Err(format!("{} expects exactly one argument", keyword)),
    }
}

fn float_arg(keyword: &str, args: &[String]) -> std::result::Result<f64, String> {
    let value = single_arg(keyword, args)?;
    value
        .parse::<f64>()
        .map_err(|_| format!("{} expects a number, got '{}'", keyword, value))
}

fn no_args(
    keyword: &str,
    args: &[String],
    command: ScriptCommand,
) -> std::result::Result<ScriptCommand, String> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(format!("{} takes no arguments", keyword))
    }
}

/// Replay parsed commands against `session`, resolving templates in `catalog`.
///
/// Stops at the first error; events before it stay applied.
pub fn run_script(session: &mut Session, catalog: &Catalog, script: &[ScriptLine]) -> Result<()> {
    for ScriptLine { line, command } in script {
        let outcome = match command {
            ScriptCommand::Action(action) => session.dispatch(action.clone()),
            ScriptCommand::Template { id, example } => catalog
                .require(id)
                .and_then(|template| session.load_template(template, *example)),
            ScriptCommand::Undo => session.undo(),
            ScriptCommand::Redo => session.redo(),
        };
        outcome.map_err(|err| match err {
            PromptpadError::UserError(msg) => {
                PromptpadError::UserError(format!("script line {}: {}", line, msg))
            }
            other => other,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorState;

    fn commands(source: &str) -> Vec<ScriptCommand> {
        parse_script(source)
            .unwrap()
            .into_iter()
            .map(|l| l.command)
            .collect()
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let parsed = parse_script("\n# comment\n   \nundo\n").unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].line, 4);
        assert_eq!(parsed[0].command, ScriptCommand::Undo);
    }

    #[test]
    fn test_parse_field_edits() {
        let parsed = commands(
            "prompt \"Hello world\"\napi-key sk-1\ntemperature 1.4\ntop-p 0.2\nfrequency-penalty 0\npresence-penalty 1\nmax-tokens 600",
        );
        assert_eq!(
            parsed,
            vec![
                ScriptCommand::Action(EditorAction::EditPrompt("Hello world".to_string())),
                ScriptCommand::Action(EditorAction::EditApiKey("sk-1".to_string())),
                ScriptCommand::Action(EditorAction::EditTemperature(1.4)),
                ScriptCommand::Action(EditorAction::EditTopP(0.2)),
                ScriptCommand::Action(EditorAction::EditFrequencyPenalty(0.0)),
                ScriptCommand::Action(EditorAction::EditPresencePenalty(1.0)),
                ScriptCommand::Action(EditorAction::EditMaxTokens(600)),
            ]
        );
    }

    #[test]
    fn test_parse_stop_keeps_typed_escape() {
        let parsed = commands("stop add \"\\n\\n\"\nstop delete '###'");
        assert_eq!(
            parsed,
            vec![
                ScriptCommand::Action(EditorAction::AddStopSymbol("\\n\\n".to_string())),
                ScriptCommand::Action(EditorAction::DeleteStopSymbol("###".to_string())),
            ]
        );
    }

    #[test]
    fn test_parse_template() {
        let parsed = commands("template rhyming\ntemplate book-review 1");
        assert_eq!(
            parsed,
            vec![
                ScriptCommand::Template {
                    id: "rhyming".to_string(),
                    example: None
                },
                ScriptCommand::Template {
                    id: "book-review".to_string(),
                    example: Some(1)
                },
            ]
        );
    }

    #[test]
    fn test_parse_errors_name_line() {
        let err = parse_script("undo\ntemperature hot").unwrap_err();
        assert_eq!(
            err.to_string(),
            "script line 2: temperature expects a number, got 'hot'"
        );

        let err = parse_script("dance").unwrap_err();
        assert!(err.to_string().contains("unknown command 'dance'"));

        let err = parse_script("stop push x").unwrap_err();
        assert!(err.to_string().contains("usage: stop add|delete"));

        let err = parse_script("undo now").unwrap_err();
        assert!(err.to_string().contains("undo takes no arguments"));

        let err = parse_script("template rhyming -1").unwrap_err();
        assert!(err.to_string().contains("non-negative integer"));

        let err = parse_script("prompt \"unterminated").unwrap_err();
        assert!(err.to_string().starts_with("script line 1: cannot split"));
    }

    #[test]
    fn test_run_script_end_to_end() {
        let script = parse_script(
            "template headline-generation 0\ntemperature 1.4\nundo\nredo\nstop add \"\\n\"",
        )
        .unwrap();
        let mut session = Session::new(EditorState::default(), 100);

        run_script(&mut session, Catalog::builtin(), &script).unwrap();

        let state = session.state();
        assert!(state.prompt.ends_with("Topic: Chicago, restaurants, summer\nHeadline:"));
        assert_eq!(state.temperature, 1.0);
        assert_eq!(state.stop_symbols, vec!["\\n"]);
        assert_eq!(session.history().past_len(), 3);
    }

    #[test]
    fn test_run_script_unknown_template() {
        let script = parse_script("temperature 0.1\ntemplate missing").unwrap();
        let mut session = Session::new(EditorState::default(), 100);

        let err = run_script(&mut session, Catalog::builtin(), &script).unwrap_err();

        assert!(matches!(err, PromptpadError::UserError(_)));
        assert!(err.to_string().starts_with("script line 2: unknown template 'missing'"));
        assert_eq!(session.state().temperature, 0.1);
    }

    #[test]
    fn test_run_script_out_of_range_example() {
        let script = parse_script("template idea-generator 0").unwrap();
        let mut session = Session::new(EditorState::default(), 100);

        let err = run_script(&mut session, Catalog::builtin(), &script).unwrap_err();

        assert!(matches!(err, PromptpadError::OutOfRange { len: 0, .. }));
    }
}
