/// Trait defining the common interface for all optimizers.
///
/// Optimizers update model parameters in place from their accumulated gradients.
pub trait Optimizer {
    /// Performs a single optimization step using the current gradients.
    fn step(&mut self);

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Backward passes only accumulate, so this is called once per training
    /// iteration before `backward`.
    fn zero_grad(&mut self);
}
