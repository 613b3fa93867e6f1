use {crate::domain::token_list, serde::Serialize};

/// The outcome of checking every entry of a token list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub tokens: Vec<TokenReport>,
    /// Contracts listed more than once, in canonical order.
    pub duplicates: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub contract: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn from_domain(report: &token_list::Report) -> CheckReport {
    CheckReport {
        tokens: report
            .tokens
            .iter()
            .map(|checked| TokenReport {
                symbol: checked.token.symbol.clone(),
                contract: checked.token.contract.clone(),
                denom: checked.denom.as_ref().ok().cloned(),
                error: checked.denom.as_ref().err().map(ToString::to_string),
            })
            .collect(),
        duplicates: report
            .duplicates
            .iter()
            .map(|address| address.as_str().to_owned())
            .collect(),
    }
}
