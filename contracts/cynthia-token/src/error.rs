use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    InsufficientBalance = 1,
    InsufficientAllowance = 2,
    InvalidReceiver = 3,
    InvalidSender = 4,
    InvalidSpender = 5,
    InvalidNewOwner = 6,
    UnauthorizedCaller = 7,
    ArithmeticOverflow = 8,
}
