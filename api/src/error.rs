use steel::*;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum TaprushError {
    #[error("The submitted score does not exceed the recorded score")]
    ScoreRegression = 0,
    #[error("The submitted click count is below the recorded click count")]
    ClicksRegression = 1,
}

error!(TaprushError);
