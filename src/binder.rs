// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Attaching loggers to the types that use them.

A [`Binder`] knows how to name a consumer's logger (its [`SourcePolicy`]) and which logger to
derive it from.  It hands each new instance a freshly derived [`Logger`] *before* the consumer's
own construction logic runs, so that logic can already log.

There are two ways to choose the name:

- the bare form, [`Binder::for_type`], derives it from the type name: `MyHttpClient` logs as
  `my_http_client`;
- the parameterized form, [`Binder::with_source`], uses the name you give it.

The `#[logged]` and `#[logged("name")]` attributes record the same choice on the type itself
(by implementing [`Logged`]), for use with [`Binder::for_logged`].

```
use minlog::{Binder, InMemoryBackend, Logger, Verbosity};
use std::sync::Arc;

struct HttpClient {
    logger: Logger,
    base_url: String,
}

let backend = Arc::new(InMemoryBackend::new());
let root = Logger::new(Verbosity::Info, backend.clone());

let connect = Binder::for_type::<HttpClient>()
    .from(&root)
    .wrap(|logger, base_url: &str| {
        logger.info("connecting").unwrap();
        HttpClient { logger, base_url: base_url.to_string() }
    });

let client = connect("https://example.com");
assert_eq!(client.logger.source(), Some("http_client"));
assert_eq!(backend.drain_logs(), "[inf] [http_client] connecting\n");
```
*/

use crate::global_logger::default_logger_for;
use crate::logger::Logger;

/// How a consumer's source name is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourcePolicy {
    /// Derived from this type name by [`source_name_for_type`].
    Inferred(String),
    /// Used as given.
    Explicit(String),
}

impl SourcePolicy {
    /// The source name this policy produces.
    pub fn source(&self) -> String {
        match self {
            SourcePolicy::Inferred(type_name) => source_name_for_type(type_name),
            SourcePolicy::Explicit(name) => name.clone(),
        }
    }
}

/// Implemented by `#[logged]` to record a type's source-name policy.
///
/// ```
/// use minlog::{Binder, Logged, Logger, logged};
///
/// #[logged]
/// struct MyHttpClient { logger: Logger }
///
/// #[logged("svc")]
/// struct Service { logger: Logger }
///
/// assert_eq!(MyHttpClient::source_policy().source(), "my_http_client");
/// assert_eq!(Service::source_policy().source(), "svc");
///
/// let svc = Binder::for_logged::<Service>().construct(|logger| Service { logger });
/// assert_eq!(svc.logger.source(), Some("svc"));
/// ```
pub trait Logged {
    /// The type's name as written in its definition.
    const TYPE_NAME: &'static str;
    /// An explicit source name, overriding the one derived from [`Self::TYPE_NAME`].
    const SOURCE: Option<&'static str> = None;

    fn source_policy() -> SourcePolicy {
        match Self::SOURCE {
            Some(name) => SourcePolicy::Explicit(name.to_string()),
            None => SourcePolicy::Inferred(Self::TYPE_NAME.to_string()),
        }
    }
}

/**
Converts a type name to a source name.

Module paths and generic arguments are dropped, then the capitalized words are lowercased and
joined with underscores.  A run of capitals is kept together as one word.

```
use minlog::binder::source_name_for_type;
assert_eq!(source_name_for_type("MyHttpClient"), "my_http_client");
assert_eq!(source_name_for_type("app::net::HTTPClient"), "http_client");
assert_eq!(source_name_for_type("Cache<alloc::string::String>"), "cache");
```
*/
pub fn source_name_for_type(type_name: &str) -> String {
    let base = match type_name.find('<') {
        Some(end) => &type_name[..end],
        None => type_name,
    };
    let ident = base.rsplit("::").next().unwrap_or(base).trim_start_matches('&').trim();
    let ident = ident.strip_prefix("r#").unwrap_or(ident);

    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_uppercase() {
            out.push(c);
            continue;
        }
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let boundary = match prev {
            Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
            Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
            _ => false,
        };
        if boundary {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Derives loggers for instances of a consumer type.
///
/// A binder derives from the process-wide default logger unless [`Binder::from`] names
/// another parent.
#[derive(Debug, Clone)]
pub struct Binder<'p> {
    policy: SourcePolicy,
    parent: Option<&'p Logger>,
}

impl Binder<'static> {
    /// Bare form: the source is inferred from `T`'s name.
    pub fn for_type<T: ?Sized>() -> Self {
        Binder::new(SourcePolicy::Inferred(std::any::type_name::<T>().to_string()))
    }

    /// Parameterized form: the source is `name`, whatever the consumer type is called.
    pub fn with_source(name: impl Into<String>) -> Self {
        Binder::new(SourcePolicy::Explicit(name.into()))
    }

    /// Uses the policy `#[logged]` recorded on `T`.
    pub fn for_logged<T: Logged>() -> Self {
        Binder::new(T::source_policy())
    }

    /// A binder using `policy`, deriving from the default logger.
    pub fn new(policy: SourcePolicy) -> Self {
        Binder {
            policy,
            parent: None,
        }
    }
}

impl<'p> Binder<'p> {
    /// Derives from `parent` instead of the default logger.
    pub fn from<'q>(self, parent: &'q Logger) -> Binder<'q> {
        Binder {
            policy: self.policy,
            parent: Some(parent),
        }
    }

    /// How this binder names its loggers.
    pub fn policy(&self) -> &SourcePolicy {
        &self.policy
    }

    /// The source every derived logger gets.
    pub fn source(&self) -> String {
        self.policy.source()
    }

    /// Derives one logger.  Each call returns an independent logger.
    pub fn derive_logger(&self) -> Logger {
        let source = self.source();
        match self.parent {
            Some(parent) => parent.logger_for(source),
            None => default_logger_for(source),
        }
    }

    /// Builds one instance, handing `ctor` its logger.
    pub fn construct<T>(&self, ctor: impl FnOnce(Logger) -> T) -> T {
        ctor(self.derive_logger())
    }

    /// Turns a constructor that takes a logger into one that doesn't.
    ///
    /// Every call of the returned function derives a fresh logger, then runs `ctor` with it.
    pub fn wrap<A, T>(self, ctor: impl Fn(Logger, A) -> T) -> impl Fn(A) -> T {
        move |args| ctor(self.derive_logger(), args)
    }
}

/// Factory form of [`Binder::wrap`], deriving from the default logger.
///
/// ```
/// use minlog::binder::{SourcePolicy, bind};
/// use minlog::Logger;
///
/// struct Worker { logger: Logger, id: u32 }
///
/// let spawn = bind(|logger, id| Worker { logger, id }, SourcePolicy::Explicit("worker".into()));
/// let w = spawn(7);
/// assert_eq!(w.id, 7);
/// assert_eq!(w.logger.source(), Some("worker"));
/// ```
pub fn bind<A, T>(ctor: impl Fn(Logger, A) -> T, policy: SourcePolicy) -> impl Fn(A) -> T {
    Binder::new(policy).wrap(ctor)
}
