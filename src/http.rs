use std::fmt::{Debug, Display};

use actix_web::{body::BoxBody, http::StatusCode, web::Json, HttpResponse, ResponseError};
use serde::Serialize;

type Result<T, E = ApiError> = std::result::Result<T, E>;
pub type JsonResponse<T> = Result<Json<T>>;

/// Body shared by every mutating endpoint.
///
/// The front end reads `message` on success and `detail` on failure.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub status: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiResponse {
    pub fn message(message: impl Into<String>) -> JsonResponse<Self> {
        Ok(Json(Self {
            status: 0,
            message: Some(message.into()),
            detail: None,
        }))
    }
}

#[derive(derive_more::Display, Debug)]
pub struct ApiError {
    msg: Box<dyn HttpBizError>,
}

impl ApiError {
    pub fn code(&self) -> u32 {
        self.msg.code()
    }
}

pub trait HttpBizError: Display + Debug + Send + Sync + 'static {
    fn code(&self) -> u32 {
        1
    }
}

impl<T> From<T> for ApiError
where
    T: HttpBizError,
{
    fn from(value: T) -> Self {
        Self {
            msg: Box::new(value),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let resp = ApiResponse {
            status: self.code(),
            message: None,
            detail: Some(self.to_string()),
        };
        HttpResponse::build(self.status_code()).json(resp)
    }
}

/// A business status code, as declared by [`biz_code!`](crate::biz_code).
#[derive(derive_more::Display, Debug, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{}", msg)]
pub struct BizCode {
    pub code: u32,
    pub msg: &'static str,
}

impl HttpBizError for BizCode {
    fn code(&self) -> u32 {
        self.code
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CodeDoc {
    pub code: u32,
    pub endpoint: &'static str,
    pub msg: &'static str,
}

impl CodeDoc {
    pub fn new(endpoint: &'static str, err: BizCode) -> Self {
        Self {
            code: err.code,
            endpoint,
            msg: err.msg,
        }
    }
}

/// Declares the business status codes of one module.
///
/// Every endpoint gets a struct holding its codes plus an upper-case static of
/// that struct. Codes are `index * 100 + endpoint_no * 10 + item_no`, endpoints
/// counting from 1 and items from 0, so one endpoint holds at most 10 codes.
/// `err_list()` is generated alongside for the doc endpoint.
///
/// # Examples
/// ```ignore
/// biz_code! {
///     mod = "activity";
///     index = 10;
///
///     Signup {
///         not_found = "Activity not found",              // 1010
///         already_signed_up = "Already signed up",       // 1011
///     }
///
///     Unregister {
///         not_found = "Activity not found",              // 1020
///     }
/// }
///
/// let err: ApiError = SIGNUP.not_found.into();
/// ```
#[macro_export]
macro_rules! biz_code {
    (
        mod = $mod_name:literal;
        index = $index:literal;

        $($endpoint:ident {
            $($item:ident = $msg:literal),* $(,)?
        })*
    ) => {
        $crate::biz_code!(@endpoint ($index * 100 + 10); $($endpoint { $($item = $msg),* })*);

        pub fn err_list() -> Vec<$crate::http::CodeDoc> {
            paste::paste! {
                vec![
                    $($(
                        $crate::http::CodeDoc::new(
                            concat!("/", $mod_name, "/", stringify!($endpoint)),
                            [< $endpoint:snake:upper >].$item,
                        ),
                    )*)*
                ]
            }
        }
    };

    (@endpoint ($base:expr); $endpoint:ident { $($item:ident = $msg:literal),* } $($tail:tt)*) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $endpoint {
            $(pub $item: $crate::http::BizCode,)*
        }

        paste::paste! {
            #[allow(unused_assignments)]
            pub static [< $endpoint:snake:upper >]: $endpoint = {
                let mut next: u32 = $base;
                $endpoint {
                    $($item: {
                        let code = $crate::http::BizCode { code: next, msg: $msg };
                        next += 1;
                        code
                    },)*
                }
            };
        }

        $crate::biz_code!(@endpoint ($base + 10); $($tail)*);
    };

    (@endpoint ($base:expr); ) => {};
}
