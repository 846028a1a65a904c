//! Row-by-row tunnel carving for the base cave topology.

use tracing::{trace, warn};

use crate::config::CaveConfig;
use crate::grid::Grid;
use crate::types::Cell;

use super::model::TunnelSpan;
use super::seed::RandomStream;

pub(super) struct CarvedCave {
    pub(super) grid: Grid,
    pub(super) tunnels: Vec<TunnelSpan>,
    pub(super) repairs: u32,
}

/// Fills the grid with stone and carves one winding air tunnel per row.
///
/// Each row's offset drifts from the previous row's, so the tunnels form one connected
/// corridor from top to bottom. The last column always stays rock. Configs that pass
/// `CaveConfig::check` never need the widening repair.
pub(super) fn carve_tunnels(config: &CaveConfig, stream: &mut RandomStream) -> CarvedCave {
    let mut grid = Grid::filled(config.size, Cell::Stone);
    let mut tunnels: Vec<TunnelSpan> = Vec::with_capacity(config.size);
    let mut repairs = 0;

    let mut prev_offset =
        stream.range_i32(config.drift.min, config.drift.max) + config.reset_offset;
    for y in 0..config.size {
        let width = stream.range_usize(config.tunnel_width.min, config.tunnel_width.max);
        let raw_offset = prev_offset + stream.range_i32(config.drift.min, config.drift.max);
        let offset = clamp_offset(config, raw_offset, width, stream) as usize;

        let mut span = TunnelSpan { start: offset, end: offset + width };
        if let Some(&above) = tunnels.last()
            && !span.overlaps(above)
        {
            let repaired = widen_towards(span, above);
            warn!(
                row = y,
                start = span.start,
                end = span.end,
                above_start = above.start,
                above_end = above.end,
                "tunnel row lost contact with the row above; widening"
            );
            span = repaired;
            repairs += 1;
        }

        grid.row_mut(y)[span.start..span.end].fill(Cell::Air);
        trace!(row = y, start = span.start, end = span.end, "carved tunnel row");
        tunnels.push(span);
        prev_offset = span.start as i32;
    }

    CarvedCave { grid, tunnels, repairs }
}

/// Keeps a `width`-wide tunnel inside `[min_offset, size - 1)`.
///
/// Overflow on the right shifts the tunnel back by the overflow plus a random jitter so it
/// does not hug the wall; underflow on the left resets to `reset_offset`.
fn clamp_offset(
    config: &CaveConfig,
    raw_offset: i32,
    width: usize,
    stream: &mut RandomStream,
) -> i32 {
    let limit = (config.size - 1) as i32;
    let width = width as i32;
    let mut offset = raw_offset;
    if offset + width > limit {
        let jitter = stream.range_i32(0, config.drift.max.max(0));
        offset = (limit - width - jitter).max(config.min_offset);
    }
    if offset < config.min_offset {
        offset = config.reset_offset;
    }
    offset
}

fn widen_towards(span: TunnelSpan, above: TunnelSpan) -> TunnelSpan {
    if span.start >= above.end {
        TunnelSpan { start: above.end - 1, end: span.end }
    } else {
        TunnelSpan { start: span.start, end: above.start + 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bounds;

    #[test]
    fn clamp_pulls_overflowing_tunnel_back_inside() {
        let config = CaveConfig::default();
        let mut stream = RandomStream::new(5);
        for raw in 6..40 {
            let offset = clamp_offset(&config, raw, 9, &mut stream);
            assert!(offset >= config.min_offset);
            assert!(offset + 9 <= 15, "raw {raw} clamped to {offset}");
        }
    }

    #[test]
    fn clamp_resets_offsets_below_minimum() {
        let config = CaveConfig::default();
        let mut stream = RandomStream::new(5);
        assert_eq!(clamp_offset(&config, 0, 8, &mut stream), config.reset_offset);
        assert_eq!(clamp_offset(&config, -3, 8, &mut stream), config.reset_offset);
        assert_eq!(clamp_offset(&config, 1, 8, &mut stream), 1);
    }

    #[test]
    fn widening_reconnects_disjoint_spans() {
        let above = TunnelSpan { start: 2, end: 5 };
        let right = widen_towards(TunnelSpan { start: 7, end: 10 }, above);
        assert!(right.overlaps(above));
        assert_eq!(right.end, 10);

        let left = widen_towards(TunnelSpan { start: 0, end: 2 }, TunnelSpan { start: 6, end: 9 });
        assert!(left.overlaps(TunnelSpan { start: 6, end: 9 }));
        assert_eq!(left.start, 0);
    }

    #[test]
    fn carved_rows_hold_exactly_their_span_of_air() {
        let config = CaveConfig::default();
        let carved = carve_tunnels(&config, &mut RandomStream::new(77));

        assert_eq!(carved.tunnels.len(), config.size);
        assert_eq!(carved.repairs, 0);
        for (y, span) in carved.tunnels.iter().enumerate() {
            for (x, cell) in carved.grid.row(y).iter().enumerate() {
                let inside = (span.start..span.end).contains(&x);
                assert_eq!(cell.is_air(), inside, "row {y} column {x}");
            }
            assert_eq!(carved.grid.row(y)[config.size - 1], Cell::Stone);
        }
    }

    #[test]
    fn narrow_tunnels_with_a_far_reset_get_repaired() {
        let config = CaveConfig {
            size: 16,
            tunnel_width: Bounds { min: 2, max: 2 },
            drift: Bounds { min: -1, max: -1 },
            min_offset: 6,
            reset_offset: 12,
            ..CaveConfig::default()
        };
        let carved = carve_tunnels(&config, &mut RandomStream::new(1));
        for pair in carved.tunnels.windows(2) {
            assert!(pair[0].overlaps(pair[1]), "{:?} and {:?} are disjoint", pair[0], pair[1]);
        }
        assert!(carved.repairs > 0, "drifting below min_offset should force a repair");
    }
}
