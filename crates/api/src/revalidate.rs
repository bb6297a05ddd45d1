// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cache revalidation hook.
//!
//! Mutating handlers notify the frontend cache that a rendered view is
//! stale. The hook is a trait so deployments without a frontend cache
//! can plug in the no-op.

/// The booking-list view path.
pub const BOOKINGS_PATH: &str = "/bookings";

/// The staff dashboard view path.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Receives stale-view notifications after mutations.
pub trait RevalidationHook {
    /// Marks the rendered view at `path` as stale.
    fn revalidate(&self, path: &str);
}

/// A hook that does nothing. Used by tests and cache-less deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRevalidation;

impl RevalidationHook for NoopRevalidation {
    fn revalidate(&self, _path: &str) {}
}
