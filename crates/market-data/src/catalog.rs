use core_types::Crypto;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn crypto(name: &str, symbol: &str, price: Decimal, change24h: Decimal) -> Crypto {
    Crypto {
        name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        change24h,
    }
}

/// The top-20 catalog the board is seeded with at startup.
///
/// Prices here are only the opening values; the refresher replaces them on
/// its first completed round. The listing order is the order the table is
/// rendered in.
pub fn seed_catalog() -> Vec<Crypto> {
    vec![
        crypto("Bitcoin", "BTC", dec!(43256.78), dec!(1.23)),
        crypto("Ethereum", "ETH", dec!(2324.65), dec!(-0.45)),
        crypto("Binance Coin", "BNB", dec!(289.45), dec!(0.76)),
        crypto("Solana", "SOL", dec!(98.34), dec!(2.54)),
        crypto("Ripple", "XRP", dec!(0.52), dec!(-1.21)),
        crypto("Cardano", "ADA", dec!(0.41), dec!(0.32)),
        crypto("Dogecoin", "DOGE", dec!(0.08), dec!(1.11)),
        crypto("Polkadot", "DOT", dec!(6.78), dec!(-0.89)),
        crypto("Avalanche", "AVAX", dec!(34.56), dec!(3.21)),
        crypto("Chainlink", "LINK", dec!(14.23), dec!(0.56)),
        crypto("Litecoin", "LTC", dec!(70.98), dec!(-0.32)),
        crypto("Polygon", "MATIC", dec!(0.76), dec!(1.45)),
        crypto("Uniswap", "UNI", dec!(6.89), dec!(-0.78)),
        crypto("Cosmos", "ATOM", dec!(9.45), dec!(2.34)),
        crypto("Stellar", "XLM", dec!(0.12), dec!(0.23)),
        crypto("Monero", "XMR", dec!(168.45), dec!(-1.34)),
        crypto("Tron", "TRX", dec!(0.11), dec!(0.45)),
        crypto("VeChain", "VET", dec!(0.023), dec!(1.56)),
        crypto("Filecoin", "FIL", dec!(4.32), dec!(-0.67)),
        crypto("Algorand", "ALGO", dec!(0.18), dec!(0.87)),
    ]
}
