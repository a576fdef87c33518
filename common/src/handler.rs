//! [`Handler`] abstractions.

/// Executable handler.
///
/// Execution is synchronous: a [`Handler`] completes before returning control
/// to its caller.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors if this [`Handler`] fails to execute.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}

impl<H, Args> Handler<Args> for &H
where
    H: Handler<Args> + ?Sized,
{
    type Ok = H::Ok;
    type Err = H::Err;

    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err> {
        (**self).execute(args)
    }
}
