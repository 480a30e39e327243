use callgate_registry::OpId;
use callgate_schema::FailureDetail;

/// Errors raised by the call gates.
///
/// Both variants are contract violations surfaced immediately to the caller
/// of the wrapped operation; the gates never retry, swallow, or partially
/// succeed.
#[derive(Debug, thiserror::Error)]
pub enum InterceptError {
    /// An argument failed its parameter schema. The operation body never ran.
    #[error("parameter {index} of `{op}` rejected: {detail}")]
    ParameterInvalid {
        op: OpId,
        index: usize,
        detail: FailureDetail,
    },

    /// The computed result failed the return schema. Side effects of the
    /// operation body are not rolled back; the caller receives this error,
    /// never the rejected value.
    #[error("return value of `{op}` rejected: {detail}")]
    ReturnInvalid { op: OpId, detail: FailureDetail },
}

pub type Result<T> = std::result::Result<T, InterceptError>;
