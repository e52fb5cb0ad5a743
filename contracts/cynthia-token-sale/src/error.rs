use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    UnauthorizedCaller = 1,
    InsufficientPayment = 2,
    InsufficientInventory = 3,
    ArithmeticOverflow = 4,
    /// The settlement asset has more decimals than the token, so one
    /// settlement unit would buy a fraction of the smallest token unit.
    UnsupportedPrecision = 5,
    InvalidOwner = 6,
}
