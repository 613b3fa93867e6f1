use {
    crate::domain::token_list::{self, TokenList},
    anyhow::Context,
    serde::Deserialize,
    std::path::Path,
};

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Config {
    /// The configured tokens, as `[[token]]` tables.
    #[serde(default, rename = "token")]
    tokens: Vec<Token>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Token {
    /// Human readable token symbol, only used for reporting.
    symbol: Option<String>,

    /// The ERC20 contract address on Ethereum.
    contract: String,
}

/// Load the token list from a TOML file.
pub async fn load(path: &Path) -> anyhow::Result<TokenList> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("I/O error while reading {path:?}"))?;
    let list = parse(&data).with_context(|| format!("invalid token list {path:?}"))?;
    tracing::debug!(?path, tokens = list.tokens.len(), "loaded token list");
    Ok(list)
}

fn parse(data: &str) -> anyhow::Result<TokenList> {
    let config = toml::de::from_str::<Config>(data)?;
    Ok(TokenList {
        tokens: config
            .tokens
            .into_iter()
            .map(|token| token_list::Token {
                symbol: token.symbol,
                contract: token.contract,
            })
            .collect(),
    })
}
