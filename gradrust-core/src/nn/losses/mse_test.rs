use super::*;
use crate::value::values;
use approx::assert_relative_eq;

#[test]
fn test_mse_sum() -> Result<(), GradRustError> {
    let preds = values(&[0.5, -0.5]);
    let loss = MSELoss::default().calculate(&preds, &[1.0, -1.0])?;
    assert_relative_eq!(loss.data(), 0.5);
    loss.backward();
    // d/dp (p - t)^2 = 2(p - t)
    assert_relative_eq!(preds[0].grad(), -1.0);
    assert_relative_eq!(preds[1].grad(), 1.0);
    Ok(())
}

#[test]
fn test_mse_mean() -> Result<(), GradRustError> {
    let preds = values(&[0.0, 2.0]);
    let loss = MSELoss::new(Reduction::Mean).calculate(&preds, &[1.0, 1.0])?;
    assert_relative_eq!(loss.data(), 1.0);
    loss.backward();
    assert_relative_eq!(preds[0].grad(), -1.0);
    assert_relative_eq!(preds[1].grad(), 1.0);
    Ok(())
}

#[test]
fn test_mse_length_mismatch() {
    let err = MSELoss::default()
        .calculate(&values(&[1.0]), &[1.0, 2.0])
        .unwrap_err();
    assert!(matches!(
        err,
        GradRustError::ShapeMismatch {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn test_mse_empty() {
    let err = MSELoss::default().calculate(&[], &[]).unwrap_err();
    assert_eq!(
        err,
        GradRustError::EmptyInput {
            operation: "MSELoss::calculate".to_string()
        }
    );
}
