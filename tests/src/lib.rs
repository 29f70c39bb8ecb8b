use keel::{Object, Orm};

/// Builds an [`Orm`] with the listed entities registered.
#[macro_export]
macro_rules! models {
    (
        $( $model:ident ),*
    ) => {{
        $crate::init_logging();
        let mut builder = keel::Orm::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}

/// Routes `tracing` events through `env_logger`; set `RUST_LOG` to see them.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sends an object graph through JSON, the way a peer process would receive it.
pub fn transport(object: &Object) -> Object {
    let text = serde_json::to_string(object).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// An [`Orm`] with default configuration and a fresh cache.
pub fn orm() -> Orm {
    init_logging();
    Orm::builder().build().unwrap()
}
