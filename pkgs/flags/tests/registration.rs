use std::sync::{Mutex, MutexGuard, PoisonError};

use tristate_flags::{
    ErrorHandling, FlagError, FlagSet, TriState, TriStateHandle, command_line, flag, flag_fs,
    flag_p, flag_p_fs, flag_var, flag_var_fs, flag_var_p, flag_var_p_fs, set_command_line,
};

/// Serializes tests that swap the process-wide flag set.
static DEFAULT_SET_LOCK: Mutex<()> = Mutex::new(());

/// Installs a fresh default flag set and puts the previous one back on drop.
struct DefaultSetGuard {
    previous: Option<FlagSet<'static>>,
    _lock: MutexGuard<'static, ()>,
}

impl DefaultSetGuard {
    fn install(name: &str) -> Self {
        let lock = DEFAULT_SET_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = set_command_line(FlagSet::new(name, ErrorHandling::ContinueOnError));
        DefaultSetGuard {
            previous: Some(previous),
            _lock: lock,
        }
    }
}

impl Drop for DefaultSetGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            set_command_line(previous);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Flag,
    FlagP,
    FlagVar,
    FlagVarP,
    FlagFs,
    FlagPFs,
    FlagVarFs,
    FlagVarPFs,
}

impl Variant {
    const ALL: [Variant; 8] = [
        Variant::Flag,
        Variant::FlagP,
        Variant::FlagVar,
        Variant::FlagVarP,
        Variant::FlagFs,
        Variant::FlagPFs,
        Variant::FlagVarFs,
        Variant::FlagVarPFs,
    ];

    fn has_shorthand(self) -> bool {
        matches!(
            self,
            Variant::FlagP | Variant::FlagVarP | Variant::FlagPFs | Variant::FlagVarPFs
        )
    }

    /// Registers a "tristate" flag the way this variant does and parses `args`.
    fn run(self, default: TriState, args: &[&str]) -> Result<TriState, FlagError> {
        let name = format!("test:{:?}", self);
        let usage = "tristate flag";

        match self {
            Variant::Flag | Variant::FlagP | Variant::FlagVar | Variant::FlagVarP => {
                let _guard = DefaultSetGuard::install(&name);
                let handle = match self {
                    Variant::Flag => flag("tristate", default, usage),
                    Variant::FlagP => flag_p("tristate", "t", default, usage),
                    Variant::FlagVar => {
                        let handle = TriStateHandle::default();
                        flag_var(handle.clone(), "tristate", default, usage);
                        handle
                    }
                    _ => {
                        let handle = TriStateHandle::default();
                        flag_var_p(handle.clone(), "tristate", "t", default, usage);
                        handle
                    }
                };
                command_line().parse(args.iter().copied())?;
                Ok(handle.get())
            }
            Variant::FlagFs | Variant::FlagPFs => {
                let mut fs = FlagSet::new(name, ErrorHandling::ContinueOnError);
                let handle = if self == Variant::FlagFs {
                    flag_fs(&mut fs, "tristate", default, usage)
                } else {
                    flag_p_fs(&mut fs, "tristate", "t", default, usage)
                };
                fs.parse(args.iter().copied())?;
                Ok(handle.get())
            }
            Variant::FlagVarFs | Variant::FlagVarPFs => {
                let mut ts = TriState::default();
                {
                    let mut fs = FlagSet::new(name, ErrorHandling::ContinueOnError);
                    if self == Variant::FlagVarFs {
                        flag_var_fs(&mut fs, &mut ts, "tristate", default, usage);
                    } else {
                        flag_var_p_fs(&mut fs, &mut ts, "tristate", "t", default, usage);
                    }
                    fs.parse(args.iter().copied())?;
                }
                Ok(ts)
            }
        }
    }
}

#[test]
fn test_registration_matrix() {
    for variant in Variant::ALL {
        for default in TriState::ALL {
            let got = variant.run(default, &[]).unwrap();
            assert_eq!(got, default, "{:?} default={} args=[]", variant, default);

            for want in TriState::ALL {
                let joined = format!("--tristate={}", want);
                let mut cases = vec![
                    vec![joined.clone()],
                    vec!["--tristate".to_owned(), want.to_string()],
                ];
                if variant.has_shorthand() {
                    cases.push(vec!["-t".to_owned(), want.to_string()]);
                }

                for args in cases {
                    let args: Vec<&str> = args.iter().map(String::as_str).collect();
                    let got = variant.run(default, &args).unwrap();
                    assert_eq!(
                        got, want,
                        "{:?} default={} args={:?}",
                        variant, default, args
                    );
                }
            }
        }
    }
}

#[test]
fn test_end_to_end_scenarios() {
    for variant in Variant::ALL {
        assert_eq!(
            variant.run(TriState::False, &["--tristate=yes"]).unwrap(),
            TriState::True
        );
        assert_eq!(
            variant.run(TriState::False, &["--tristate", "unknown"]).unwrap(),
            TriState::None
        );
        assert_eq!(variant.run(TriState::False, &[]).unwrap(), TriState::False);
        if variant.has_shorthand() {
            assert_eq!(
                variant.run(TriState::False, &["-t", "true"]).unwrap(),
                TriState::True
            );
        }
    }
}

#[test]
fn test_bad_value_is_reported() {
    for variant in Variant::ALL {
        let err = variant.run(TriState::True, &["--tristate=doug"]).unwrap_err();
        assert!(
            matches!(err, FlagError::InvalidValue { .. }),
            "{:?}: {:?}",
            variant,
            err
        );
        assert!(err.to_string().contains("bad tristate value"), "{}", err);
    }
}

#[test]
fn test_shorthand_only_for_p_variants() {
    for variant in Variant::ALL {
        let res = variant.run(TriState::None, &["-t", "yes"]);
        assert_eq!(res.is_ok(), variant.has_shorthand(), "{:?}", variant);
    }
}

#[test]
fn test_default_set_is_restored() {
    let _lock = DEFAULT_SET_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let before = command_line().name().to_owned();
    drop(_lock);

    let got = Variant::Flag.run(TriState::None, &["--tristate=y"]).unwrap();
    assert_eq!(got, TriState::True);

    let _lock = DEFAULT_SET_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let default_set = command_line();
    assert_eq!(default_set.name(), before);
    assert_eq!(default_set.error_handling(), ErrorHandling::ExitOnError);
    assert!(default_set.lookup("tristate").is_none());
}
