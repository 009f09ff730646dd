// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A welcome screen for my computer

fn main() -> welcome::Result<()> {
    env_logger::init();

    welcome::shell::run(&welcome::Config::default())
}
