pub mod activity;

#[macro_export]
macro_rules! ensure_ok {
    ($predict:expr, $err:expr) => {
        if !$predict {
            return Err($err);
        }
    };
}

#[macro_export]
macro_rules! ensure_exist {
    ($option:expr, $err:expr) => {
        match $option {
            Some(v) => v,
            None => return Err($err),
        }
    };
}
