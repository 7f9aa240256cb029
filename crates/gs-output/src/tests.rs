//! Integration tests for gs-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use gs_core::EntityId;

    use crate::csv::CsvWriter;
    use crate::row::{EntityHistoryRow, GridEventKind, GridEventRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn history_row(entity_id: u64, step: usize) -> EntityHistoryRow {
        EntityHistoryRow {
            entity_id: EntityId(entity_id),
            name: format!("entity-{entity_id}"),
            step,
            x_shift: 1.0,
            y_shift: 0.0,
            time_shift: 1.0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("entity_history.csv").exists());
        assert!(dir.path().join("grid_events.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("entity_history.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["entity_id", "name", "step", "x_shift", "y_shift", "time_shift"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("grid_events.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["kind", "entity_id", "peer_id", "time", "collision_count"]);
    }

    #[test]
    fn csv_history_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![history_row(0, 0), history_row(0, 1), history_row(1, 0)];
        w.write_history(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("entity_history.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // entity_id
        assert_eq!(&read_rows[1][2], "1"); // step
        assert_eq!(&read_rows[2][0], "1");
    }

    #[test]
    fn csv_event_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&GridEventRow {
            kind: GridEventKind::CollisionScheduled,
            entity_id: EntityId(3),
            peer_id: Some(EntityId(4)),
            time: 12.5,
            collision_count: 0,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("grid_events.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "collision_scheduled");
        assert_eq!(&read_rows[0][1], "3");
        assert_eq!(&read_rows[0][2], "4");
        assert_eq!(&read_rows[0][3], "12.5");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_history_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_history(&[]).unwrap(); // should return Ok(())
    }
}

#[cfg(test)]
mod integration {
    use tempfile::TempDir;

    use gs_core::{shape::rectangle, RouteDelta, Shape};
    use gs_entity::EntityBuilder;
    use gs_grid::{Grid, GridConfig};

    use crate::csv::CsvWriter;
    use crate::history::collect_entity_histories;
    use crate::observer::GridCsvObserver;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn unit_square(name: &str, x: f64, y: f64) -> EntityBuilder {
        EntityBuilder::new(name).shape(Shape::new(rectangle(1.0, 1.0, 2)).unwrap()).position(x, y)
    }

    #[test]
    fn grid_events_and_history_both_exported() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut grid: Grid<GridCsvObserver<CsvWriter>> =
            GridConfig::new("demo").x_size(20).y_size(20).max_time(100.0).build_with_observer(GridCsvObserver::new(writer));

        let a = grid.add_entity(unit_square("a", 5.0, 5.0), None).unwrap();
        grid.add_route(a, vec![RouteDelta::new(5.0, 0.0, 5.0)], Some(0.0), false).unwrap();

        grid.simulate().unwrap();

        let history_rows = collect_entity_histories(&grid);
        assert!(!history_rows.is_empty(), "entity should have realized at least one route segment");

        let obs = grid.observer_mut();
        obs.writer_mut().write_history(&history_rows).unwrap();
        obs.writer_mut().finish().unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("entity_history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert!(!rows.is_empty());

        let mut events_rdr = csv::Reader::from_path(dir.path().join("grid_events.csv")).unwrap();
        let events: Vec<_> = events_rdr.records().map(|r| r.unwrap()).collect();
        // At minimum: entity_added, the placement route_planned, the explicit
        // route_planned, and at least one route_realized.
        assert!(events.len() >= 4, "expected at least 4 grid event rows, got {}", events.len());
    }
}
