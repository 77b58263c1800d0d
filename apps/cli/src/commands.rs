use crate::args::Command;
use anyhow::{Context, bail};
use smenum::prelude::*;
use std::io::Write;
use tracing::debug;

pub(crate) fn run(command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::List => {
            for &card in CreditCard::variants() {
                write_card(out, card)?;
            }
        },
        Command::Code { code } => {
            let Some(card) = CreditCard::from_code(code) else {
                bail!("no credit card with code {code}");
            };
            write_card(out, card)?;
        },
        Command::Name { name } => {
            let Some(card) = CreditCard::from_name(&name) else {
                bail!("no credit card named \"{name}\"");
            };
            write_card(out, card)?;
        },
        Command::Quote { card, amount } => {
            if !amount.is_finite() || amount < 0.0 {
                bail!("amount must be a non-negative number, got {amount}");
            }
            let card = resolve(&card)?;
            writeln!(out, "{card}: {amount:.2} -> {:.2}", card.apply_discount(amount))?;
        },
    }

    Ok(())
}

/// Resolves a tier from either its numeric code or its name.
fn resolve(input: &str) -> anyhow::Result<CreditCard> {
    let card = match input.parse::<i32>() {
        Ok(code) => CreditCard::try_from(code),
        Err(_) => input.parse::<CreditCard>(),
    }
    .with_context(|| format!("resolving credit card '{input}'"))?;

    debug!(%card, code = card.code(), "Credit card resolved");
    Ok(card)
}

fn write_card(out: &mut impl Write, card: CreditCard) -> std::io::Result<()> {
    writeln!(out, "{}\t{}\t{:.2}", card.code(), card, card.discount())
}
