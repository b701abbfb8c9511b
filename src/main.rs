/*
main.rs

Copyright 2025 Hervé Quatremain

This file is part of Diskshift.

Diskshift is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Diskshift is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Diskshift. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/


use std::process::ExitCode;

use diskshift::application::Application;
use diskshift::cli_options::{self, Startup};

fn main() -> ExitCode {
    let options = match cli_options::parse() {
        Startup::Play(options) => options,
        Startup::Exit(code) => return ExitCode::from(code),
    };

    let app: Application = Application::new(&options);
    ExitCode::from(app.run())
}
