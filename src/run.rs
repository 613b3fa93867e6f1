use {
    crate::{
        api::dto,
        cli,
        domain::{coin::Coin, denom, erc20::Erc20Token, eth},
        infra,
    },
    anyhow::Context,
    clap::Parser,
    serde::Serialize,
    std::{io::Write, process::ExitCode},
};

pub async fn start(args: impl IntoIterator<Item = String>) -> ExitCode {
    let args = cli::Args::parse_from(args);
    infra::observe::initialize(&args.log);
    tracing::debug!("running peggy with {args:#?}");

    match run(args.command, &mut std::io::stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs a single command, writing its JSON output to `out`.
pub async fn run(command: cli::Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        cli::Command::Validate { address } => {
            let address = eth::Address::new(address)?;
            print(
                out,
                &dto::ValidAddress {
                    denom: denom::encode(address.as_str()),
                    address: address.into_string(),
                },
            )
        }
        cli::Command::ToCoin { amount, contract } => {
            let token = Erc20Token::new(amount, contract);
            token.validate_basic().context("invalid token")?;
            print(out, &dto::coin::from_domain(&token.to_coin()))
        }
        cli::Command::FromCoin { coin } => {
            let token = from_coin(&coin)?;
            print(out, &dto::token::from_domain(&token))
        }
        cli::Command::Merge { coins } => {
            let tokens = coins
                .iter()
                .map(|coin| from_coin(coin))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let (first, rest) = tokens.split_first().context("nothing to merge")?;
            let merged = rest
                .iter()
                .try_fold(first.clone(), |merged, token| merged.merge(token))?;
            print(out, &dto::token::from_domain(&merged))
        }
        cli::Command::Sort { addresses } => {
            let addresses = addresses
                .into_iter()
                .map(|address| address.parse::<eth::Address>())
                .collect::<Result<Vec<_>, _>>()?;
            print(
                out,
                &dto::Addresses {
                    addresses: eth::sort_unique(addresses)
                        .into_iter()
                        .map(String::from)
                        .collect(),
                },
            )
        }
        cli::Command::Check { config } => {
            let list = infra::config::file::load(&config).await?;
            let report = list.check();
            print(out, &dto::check::from_domain(&report))?;
            match report.invalid() {
                0 => Ok(()),
                n => anyhow::bail!("{n} of {} tokens are invalid", report.tokens.len()),
            }
        }
    }
}

/// Parses a coin given either as `<amount><denom>` or as the JSON printed by
/// `to-coin`.
fn from_coin(coin: &str) -> anyhow::Result<Erc20Token> {
    let coin = if coin.trim_start().starts_with('{') {
        let coin = serde_json::from_str::<dto::Coin>(coin).context("invalid coin JSON")?;
        dto::coin::to_domain(&coin)
    } else {
        coin.parse::<Coin>()?
    };
    Erc20Token::from_coin(&coin).with_context(|| format!("{coin} isn't a valid peggy coin"))
}

fn print(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
