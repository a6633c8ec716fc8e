//! Implementation of the `promptpad expand` command.

use crate::cli::ExpandArgs;
use crate::config::Config;
use crate::error::Result;
use crate::templates::{Catalog, expand, expand_default};
use std::path::Path;

/// Execute the `promptpad expand` command.
///
/// Prints only the expanded prompt so the output can be piped.
pub fn cmd_expand(config_path: Option<&Path>, args: ExpandArgs) -> Result<()> {
    let catalog = Config::resolve(config_path)?.catalog()?;
    let prompt = expanded_prompt(&catalog, &args.id, args.example)?;
    println!("{}", prompt);
    Ok(())
}

fn expanded_prompt(catalog: &Catalog, id: &str, example: Option<usize>) -> Result<String> {
    let template = catalog.require(id)?;
    let patch = match example {
        Some(index) => expand(template, index)?,
        None => expand_default(template),
    };
    Ok(patch.prompt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptpadError;

    #[test]
    fn test_expanded_prompt_with_index() {
        let prompt = expanded_prompt(Catalog::builtin(), "company-classification", Some(2)).unwrap();
        assert!(prompt.ends_with("Mcdonalds: Food, Fast Food, Logistics, Restaurants\nFedEx:"));
    }

    #[test]
    fn test_expanded_prompt_defaults_to_first_example() {
        let prompt = expanded_prompt(Catalog::builtin(), "rhyming", None).unwrap();
        assert!(prompt.contains("starting with the letter \"b\""));
    }

    #[test]
    fn test_expanded_prompt_out_of_range() {
        let err = expanded_prompt(Catalog::builtin(), "rhyming", Some(1)).unwrap_err();
        assert!(matches!(err, PromptpadError::OutOfRange { index: 1, len: 1, .. }));
    }

    #[test]
    fn test_expanded_prompt_unknown_id() {
        let err = expanded_prompt(Catalog::builtin(), "nope", None).unwrap_err();
        assert!(matches!(err, PromptpadError::UserError(_)));
    }
}
