use std::process::ExitCode;

use server::ServiceKind;

fn main() -> ExitCode {
    server::launcher::launch(ServiceKind::Evaluacion)
}
