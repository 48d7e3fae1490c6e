// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

fn main() {
    if let Err(err) = dynamic_api_codegen::build::generate() {
        panic!("controller generation failed: {err}");
    }
}
