/// Reports a broken internal link between nodes.
///
/// Only reachable if the parent/child bookkeeping of a tree got out of sync with its arena, which no sequence of public operations can cause.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn corrupted(msg: &str) -> ! {
    unreachable!("tree corruption detected: {}", msg)
}
