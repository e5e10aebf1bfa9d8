use money_core::{
    catalog,
    error::Result,
    num,
    Money,
};

/// Split a bill between some friends and show everyone's share, then show
/// the same thing in bitcoin (and millibitcoin, for the skeptics).
fn example() -> Result<()> {
    let bill = Money::from_code(num!(1287.45), "usd")?;
    let share = (&bill / num!(3))?;
    println!("bill: {}, each pays: {}", bill, share.render());

    let refund = (&share - Money::from_code(num!(500), "USD")?)?;
    println!("refund after paying 500: {}", refund);

    let stash = Money::from_code(num!(0.0421), "BTC")?;
    println!("stash: {} / {}", stash.render(), stash.render_as("mBTC"));

    // you can't mix currencies
    if let Err(err) = &bill + &stash {
        println!("can't add {} to {}: {}", stash.currency(), bill.currency(), err);
    }

    println!("known currencies: {}", catalog::codes().collect::<Vec<_>>().join(", "));
    Ok(())
}

fn main() {
    if let Err(err) = example() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
