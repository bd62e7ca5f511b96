//! Command-line and environment configuration.

use catalog_core::{QueryParameter, DEFAULT_BASE_URL};
use clap::{Parser, ValueEnum};

/// Output format of the log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Command-line arguments for `card-catalog`.
#[derive(Parser, Debug)]
#[command(author, version, about = "Looks up cards in the public card catalog", long_about = None)]
pub struct Args {
    /// Catalog origin; `/v1/cards` is appended.
    #[arg(long, env = "CATALOG_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Card name to look up. Repeat for several concurrent lookups.
    #[arg(short = 'n', long = "name", default_values = ["Opt", "Black Lotus"])]
    pub names: Vec<String>,

    /// Extra filter added to every lookup, e.g. `set=LEA`.
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<QueryParameter>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, env = "CATALOG_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, env = "CATALOG_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Args {
    /// One parameter list per name: `name` first, then every `--param` in
    /// the order given.
    pub fn queries(&self) -> Vec<Vec<QueryParameter>> {
        self.names
            .iter()
            .map(|name| {
                std::iter::once(QueryParameter::name(name.as_str()))
                    .chain(self.params.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

fn parse_param(s: &str) -> Result<QueryParameter, String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok(QueryParameter::new(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_look_up_opt_and_black_lotus() {
        let args = Args::try_parse_from(["card-catalog"]).unwrap();
        assert_eq!(args.names, vec!["Opt", "Black Lotus"]);
        assert!(args.params.is_empty());
        assert_eq!(args.log_format, LogFormat::Text);
        assert_eq!(
            args.queries(),
            vec![
                vec![QueryParameter::name("Opt")],
                vec![QueryParameter::name("Black Lotus")],
            ]
        );
    }

    #[test]
    fn explicit_names_replace_defaults() {
        let args = Args::try_parse_from(["card-catalog", "-n", "Island", "--name", "Opt"]).unwrap();
        assert_eq!(args.names, vec!["Island", "Opt"]);
    }

    #[test]
    fn params_follow_name_in_every_query() {
        let args = Args::try_parse_from([
            "card-catalog",
            "-n",
            "Opt",
            "-n",
            "Island",
            "-p",
            "set=LEA",
            "--param",
            "rarity=Common",
        ])
        .unwrap();
        let queries = args.queries();
        assert_eq!(queries.len(), 2);
        assert_eq!(
            queries[1],
            vec![
                QueryParameter::name("Island"),
                QueryParameter::new("set", "LEA"),
                QueryParameter::new("rarity", "Common"),
            ]
        );
    }

    #[test]
    fn param_value_may_contain_equals() {
        assert_eq!(
            parse_param("text=a=b").unwrap(),
            QueryParameter::new("text", "a=b")
        );
    }

    #[test]
    fn malformed_params_are_rejected() {
        assert!(Args::try_parse_from(["card-catalog", "-p", "set"]).is_err());
        assert!(Args::try_parse_from(["card-catalog", "-p", "=LEA"]).is_err());
    }

    #[test]
    fn help_documents_every_flag() {
        use clap::CommandFactory;

        let help = Args::command().render_help().to_string();
        assert!(help.contains("Log output format"));
        assert!(help.contains("Log filter used when `RUST_LOG` is not set"));
    }

    #[test]
    fn json_log_format() {
        let args = Args::try_parse_from(["card-catalog", "--log-format", "json"]).unwrap();
        assert_eq!(args.log_format, LogFormat::Json);
    }
}
