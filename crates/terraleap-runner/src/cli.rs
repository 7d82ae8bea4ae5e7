/// Ticks run when `--ticks` is not given: one minute at 60 Hz.
pub const DEFAULT_TICKS: u64 = 3600;

/// Command-line options for a headless run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after this many ticks. Zero runs until quit.
    pub ticks: u64,
    /// Overrides the configured level seed.
    pub seed: Option<u64>,
    /// Skip frame pacing and win-banner pauses.
    pub unthrottled: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            seed: None,
            unthrottled: false,
        }
    }
}

impl RunOptions {
    /// Parse `--ticks=N`, `--seed=N` and `--unthrottled`. Unknown or
    /// malformed arguments are logged and ignored.
    pub fn parse<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        for arg in args {
            if let Some(v) = arg.strip_prefix("--ticks=") {
                match v.parse::<u64>() {
                    Ok(n) => opts.ticks = n,
                    Err(_) => tracing::warn!("Ignoring malformed {arg}"),
                }
            } else if let Some(v) = arg.strip_prefix("--seed=") {
                match v.parse::<u64>() {
                    Ok(n) => opts.seed = Some(n),
                    Err(_) => tracing::warn!("Ignoring malformed {arg}"),
                }
            } else if arg == "--unthrottled" {
                opts.unthrottled = true;
            } else {
                tracing::warn!("Ignoring unknown argument {arg}");
            }
        }
        opts
    }

    pub fn max_ticks(&self) -> Option<u64> {
        (self.ticks > 0).then_some(self.ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> RunOptions {
        RunOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let opts = parse(&[]);
        assert_eq!(opts, RunOptions::default());
        assert_eq!(opts.max_ticks(), Some(3600));
    }

    #[test]
    fn all_flags_in_any_order() {
        let opts = parse(&["--unthrottled", "--seed=99", "--ticks=10"]);
        assert_eq!(
            opts,
            RunOptions {
                ticks: 10,
                seed: Some(99),
                unthrottled: true,
            }
        );
    }

    #[test]
    fn zero_ticks_is_unbounded() {
        assert_eq!(parse(&["--ticks=0"]).max_ticks(), None);
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let opts = parse(&["--ticks=lots", "--seed=-1", "--fullscreen"]);
        assert_eq!(opts, RunOptions::default());
    }
}
