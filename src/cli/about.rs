//! `--info` and `--license` output.

/// Injected at compile time, e.g. `BUILD_DATE=$(date -u +%F) cargo build`.
const BUILD_DATE: Option<&str> = option_env!("BUILD_DATE");
const BUILD_REVISION: Option<&str> = option_env!("BUILD_REVISION");

pub fn build_info() -> String {
    format!(
        "Version: {}\nOperating System: {}\nSystem Architecture: {}\nBuild Date: {}\nBuild Revision: {}\n",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
        BUILD_DATE.unwrap_or("unknown"),
        BUILD_REVISION.unwrap_or("unknown"),
    )
}

pub const fn license_notice() -> &'static str {
    "Copyright 2025 The trading-cli Authors
Licensed under the Apache License, Version 2.0 (the 'License');
you may not use this file except in compliance with the License.
You may obtain a copy of the License at
    http://www.apache.org/licenses/LICENSE-2.0
Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an 'AS IS' BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"
}
