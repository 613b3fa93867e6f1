use {
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

/// Encode, decode and validate the coins the peggy bridge mints for ERC20
/// tokens.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The log filter.
    #[arg(long, env, default_value = "warn,peggy=info")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an Ethereum contract address and print its peggy denom.
    Validate { address: String },

    /// Convert an ERC20 token amount into its native coin.
    ToCoin {
        amount: u64,
        contract: String,
    },

    /// Convert a native coin, e.g. `100peggy/0x...` or the JSON printed by
    /// `to-coin`, into its ERC20 token amount.
    FromCoin { coin: String },

    /// Merge coins of the same ERC20 token into a single token amount. Coins
    /// are accepted in the same forms as `from-coin`.
    Merge {
        #[arg(required = true)]
        coins: Vec<String>,
    },

    /// Validate contract addresses and print them in canonical order, without
    /// duplicates.
    Sort { addresses: Vec<String> },

    /// Check every entry of a token list.
    Check {
        /// Path to the token list TOML file.
        #[arg(long, env = "PEGGY_CONFIG")]
        config: PathBuf,
    },
}
