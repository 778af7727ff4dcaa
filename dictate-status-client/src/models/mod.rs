// SPDX-License-Identifier: GPL-3.0-only
pub mod protocol;
pub mod state;
