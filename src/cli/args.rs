use crate::cli::errors::CommandError;

/// Positional arguments plus `--flag value` / `--flag=value` options.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args<'a> {
    positional: Vec<&'a str>,
    options: Vec<(&'a str, &'a str)>,
}

impl<'a> Args<'a> {
    /// Splits `raw`, accepting only the listed option names (without dashes).
    pub fn parse(raw: &[&'a str], known: &[&str]) -> Result<Self, CommandError> {
        let mut parsed = Args::default();
        let mut tokens = raw.iter().copied();
        while let Some(token) = tokens.next() {
            let Some(option) = token.strip_prefix("--") else {
                parsed.positional.push(token);
                continue;
            };
            let (name, value) = match option.split_once('=') {
                Some((name, value)) => (name, value),
                None => {
                    let value = tokens.next().ok_or_else(|| {
                        CommandError::InvalidArguments(format!("`--{}` needs a value", option))
                    })?;
                    (option, value)
                }
            };
            if !known.contains(&name) {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown option `--{}`",
                    name
                )));
            }
            parsed.options.push((name, value));
        }
        Ok(parsed)
    }

    pub fn positional(&self) -> &[&'a str] {
        &self.positional
    }

    pub fn first(&self) -> Option<&'a str> {
        self.positional.first().copied()
    }

    /// Last value given for `name`.
    pub fn value(&self, name: &str) -> Option<&'a str> {
        self.options
            .iter()
            .rev()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Every value given for a repeatable option, in order.
    pub fn values(&self, name: &str) -> Vec<&'a str> {
        self.options
            .iter()
            .filter(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_positionals_and_options() {
        let raw = ["두부", "--storage", "냉장", "--tag=soy", "--tag", "protein"];
        let args = Args::parse(&raw, &["storage", "tag"]).unwrap();
        assert_eq!(args.positional(), ["두부"]);
        assert_eq!(args.value("storage"), Some("냉장"));
        assert_eq!(args.values("tag"), ["soy", "protein"]);
        assert_eq!(args.value("expires"), None);
    }

    #[test]
    fn rejects_unknown_or_dangling_options() {
        assert!(Args::parse(&["--color", "red"], &["storage"]).is_err());
        assert!(Args::parse(&["milk", "--storage"], &["storage"]).is_err());
    }
}
