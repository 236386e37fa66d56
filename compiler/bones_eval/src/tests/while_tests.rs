//! `while` blocks: guard evaluation, block resolution, nesting and the
//! shared store.

use super::{output_of, store_of};
use pretty_assertions::assert_eq;

#[test]
fn zero_guard_skips_the_body_entirely() {
    let store = store_of("clear x; while x not 0 do; incr x; end;");
    assert_eq!(store.to_string(), "{x: 0}");
}

#[test]
fn loop_counts_down_into_another_variable() {
    let store =
        store_of("clear x; incr x; incr x; clear y; while x not 0 do; incr y; decr x; end; print y");
    assert_eq!(store.to_string(), "{x: 0, y: 2}");
}

#[test]
fn cursor_lands_past_the_matching_end() {
    // `clear z` sits after the block and must still execute.
    let store = store_of("clear x; while x not 0 do; incr x; end; clear z");
    assert_eq!(store.to_string(), "{x: 0, z: 0}");
}

#[test]
fn body_runs_once_per_iteration() {
    let output = output_of("clear x; incr x; incr x; while x not 0 do; decr x; end");
    assert_eq!(output.matches("5 - decr x").count(), 2);
}

#[test]
fn guard_is_reevaluated_only_between_full_body_runs() {
    // The body drives x to 0 and back up before its last statement; the
    // loop still exits because the guard reads 0 only at the boundary.
    let store = store_of("clear x; incr x; while x not 0 do; decr x; incr x; decr x; end");
    assert_eq!(store.to_string(), "{x: 0}");
}

#[test]
fn nested_blocks_resolve_their_own_end() {
    let store = store_of(
        "clear x; incr x; incr x; clear total; \
         while x not 0 do; \
         clear y; incr y; incr y; \
         while y not 0 do; incr total; decr y; end; \
         decr x; end",
    );
    assert_eq!(store.to_string(), "{total: 4, x: 0, y: 0}");
}

#[test]
fn body_mutations_are_visible_to_the_enclosing_scope() {
    // The guard itself is decremented inside the body; the enclosing
    // scope sees every change because the store is shared, not copied.
    let store = store_of("clear x; incr x; incr x; incr x; while x not 0 do; decr x; end");
    assert_eq!(store.to_string(), "{x: 0}");
}

#[test]
fn names_containing_end_do_not_close_the_block() {
    let store = store_of(
        "clear endless; clear x; incr x; while x not 0 do; incr endless; decr x; end; print endless",
    );
    assert_eq!(store.to_string(), "{endless: 1, x: 0}");
}

#[test]
fn loop_trace_keeps_absolute_line_numbers() {
    let output = output_of("clear x; incr x; while x not 0 do; decr x; end");
    // The body statement is line 4 of the program, also inside the loop.
    assert!(output.contains("4 - decr x"), "output was: {output}");
}
