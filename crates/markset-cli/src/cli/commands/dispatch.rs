use super::super::args::*;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::List(args) => super::list::run(args),
        Command::Show(args) => super::show::run(args),
    }
}
