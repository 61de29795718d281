/// Shared helpers for integration tests
pub mod mocks;

/// Small APKINDEX used across integration tests
///
/// `app -> lib -> base`, `app -> ghost` (not in the index), and a
/// `loop-a <-> loop-b` cycle.
pub const SAMPLE_INDEX: &str = "P:base\nV:1.0-r0\nI:1000\nT:Base system files\n\n\
P:lib\nV:2.1-r1\nI:2000\nT:Shared library\nD:base so:libc.musl-x86_64.so.1\n\n\
P:app\nV:3.0-r0\nI:4000\nT:Application using lib\nD:lib>=2.0 ghost base\n\n\
P:loop-a\nV:1\nI:10\nD:loop-b\n\n\
P:loop-b\nV:1\nI:20\nD:loop-a\n";
