use std::{error::Error, path::Path};
use tristate_cli::{
    cli,
    filter::{self, Selection},
};
use tristate_core::TriState;
use tristate_flags::{FlagSet, TriStateHandle, flag_fs, flag_p_fs};

/// The `tsfilter` flags, all tristate-valued: switches take a value (`--count=yes`).
struct MinFlags {
    want: TriStateHandle,
    include_unset: TriStateHandle,
    count: TriStateHandle,
}

impl MinFlags {
    fn declare(fs: &mut FlagSet<'_>) -> Self {
        MinFlags {
            want: flag_p_fs(
                fs,
                "want",
                "w",
                TriState::None,
                "keep records that are True, False, or None for all records",
            ),
            include_unset: flag_fs(
                fs,
                "include-unset",
                TriState::False,
                "also keep records without a value when filtering for True or False (yes/no)",
            ),
            count: flag_p_fs(
                fs,
                "count",
                "c",
                TriState::False,
                "print only the number of kept records (yes/no)",
            ),
        }
    }

    fn selection(&self) -> Selection {
        Selection {
            want: self.want.get(),
            include_unset: self.include_unset.get().unwrap_or(false),
        }
    }

    fn count_only(&self) -> bool {
        self.count.get().unwrap_or(false)
    }
}

/// The `tsfilter` filter declared through the process-wide flag set.
pub fn main() -> Result<(), Box<dyn Error>> {
    cli::init_logging(0);

    // The guard must be released before `parse` locks the default set again.
    let flags = MinFlags::declare(&mut tristate_flags::command_line());
    tristate_flags::parse()?;

    let args = tristate_flags::args();
    filter::run(
        args.first().map(Path::new),
        &flags.selection(),
        flags.count_only(),
    )
}
