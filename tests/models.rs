//! Structural checks of the static models.

use meshlit::{
    attribute::{ArrayKind, AttributeComponent, AttributeType},
    by_name, Lint, Model, ALIGNMENT, CUBE, MODELS, TEST,
};

fn max_index(list: &[u16]) -> u16 {
    list.iter().copied().max().unwrap_or(0)
}

#[test]
fn cube_indices() {
    assert_eq!(CUBE.indices.len(), 36);
    assert_eq!(CUBE.indices_amount, 36);
    assert!(CUBE.indices.iter().all(|&i| i < 14));
    assert_eq!(max_index(CUBE.indices), 7);
}

#[test]
fn cube_tex_indices() {
    let tex = CUBE.tex_indices.unwrap();
    assert_eq!(tex.data.len(), 36);
    assert_eq!(tex.amount, 36);
    assert!(tex.data.iter().all(|&i| i < 20));
    assert_eq!(CUBE.tex_coords.len(), 40);
    assert_eq!(CUBE.tex_coord_pairs().unwrap().len(), 20);
}

#[test]
fn test_indices() {
    assert_eq!(TEST.indices.len(), 36);
    assert_eq!(TEST.indices_amount, 36);
    assert!(TEST.indices.iter().all(|&i| i < 14));
}

#[test]
fn test_tex_coords_are_kept_as_authored() {
    assert_eq!(TEST.tex_coords_amount, 36);
    assert_eq!(TEST.tex_coords.len(), 36);
    assert_eq!(TEST.tex_coords[3], 3.0);
    assert_eq!(TEST.tex_coords[35], 14.0);
    assert!(!TEST.has_tex_indices());
}

#[test]
fn declared_vertex_amounts() {
    for m in MODELS {
        assert_eq!(m.vertices_amount, 14, "{}", m.name);
        assert_eq!(m.positions().unwrap().len(), 14, "{}", m.name);
    }
}

#[test]
fn statics_validate() {
    for m in MODELS {
        assert_eq!(m.validate(), Ok(()), "{}", m.name);
    }
}

#[test]
fn every_array_is_aligned() {
    for m in MODELS {
        for layout in m.layout() {
            assert!(layout.aligned, "{}.{}", m.name, layout.kind);
        }
        assert_eq!(m.vertices.as_ptr() as usize % ALIGNMENT, 0);
        assert_eq!(m.indices.as_ptr() as usize % ALIGNMENT, 0);
    }
}

#[test]
fn cube_layout() {
    let layout = CUBE.layout();
    let kinds: Vec<_> = layout.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        [
            ArrayKind::Vertices,
            ArrayKind::Indices,
            ArrayKind::TexCoords,
            ArrayKind::TexIndices
        ]
    );
    assert_eq!(layout[0].ty, AttributeType::Vec3);
    assert_eq!(layout[0].count(), 14);
    assert_eq!(layout[0].byte_len(), 168);
    assert_eq!(layout[1].component, AttributeComponent::U16);
    assert_eq!(layout[1].byte_len(), 72);
    assert_eq!(layout[2].count(), 20);
    assert_eq!(TEST.layout().len(), 3);
}

#[test]
fn cube_triangles() {
    let tris: Vec<_> = CUBE.triangles().collect::<Result<_, _>>().unwrap();
    assert_eq!(tris.len(), 12);
    let first = tris[0];
    assert_eq!(first.corners, [1, 2, 0]);
    assert_eq!(first.positions[0], nalgebra::point![-1.0, 1.0, 1.0]);
    assert_eq!(first.positions[2], nalgebra::point![-1.0, -1.0, 1.0]);
    // every referenced corner is a cube corner
    for t in &tris {
        for p in &t.positions {
            assert!(p.iter().all(|c| c.abs() == 1.0), "{p:?}");
        }
    }
}

#[test]
fn cube_tex_triangles() {
    let uv = CUBE.tex_triangle(6).unwrap().unwrap();
    assert_eq!(uv[0], nalgebra::point![1.0, 0.0]);
    assert_eq!(uv[1], nalgebra::point![1.0, 1.0]);
    assert_eq!(uv[2], nalgebra::point![0.0, 1.0]);
    assert!(CUBE.tex_triangle(12).is_err());
    assert_eq!(TEST.tex_triangle(0), Ok(None));
}

#[test]
fn lints_surface_open_data() {
    let unreferenced: Vec<usize> = (8..14).collect();
    assert_eq!(
        CUBE.lints(),
        vec![Lint::UnreferencedVertices(unreferenced.clone())]
    );

    let lints = TEST.lints();
    assert!(lints.contains(&Lint::UnreferencedVertices(unreferenced)));
    assert!(lints.contains(&Lint::UnmappedTexCoords {
        pairs: 18,
        vertices: 14
    }));
    assert!(lints.iter().any(|l| matches!(
        l,
        Lint::TexCoordsOutsideUnitRange { min, max, .. } if *min == 2.0 && *max == 19.0
    )));
}

#[test]
fn registry() {
    assert!(std::ptr::eq(by_name("cube").unwrap(), &CUBE));
    assert!(std::ptr::eq(by_name("test").unwrap(), &TEST));
    assert!(by_name("sphere").is_none());
    let names: Vec<&str> = MODELS.iter().map(|m: &&Model| m.name).collect();
    assert_eq!(names, ["cube", "test"]);
}
