use criterion::{criterion_group, criterion_main, Criterion};
use http::Method;
use std::hint::black_box;
use std::sync::Arc;
use trierouter::{router::Router, RouteTable};

fn example_table() -> &'static str {
    r#"
routes:
  - path: /
    handlers:
      GET: root_handler
  - path: /zoo/animals
    handlers:
      GET: get_animals
      POST: create_animal
  - path: /zoo/animals/{id}
    handlers:
      GET: get_animal
      PUT: update_animal
      PATCH: patch_animal
      DELETE: delete_animal
  - path: /zoo/animals/{id:^\d+$}/toys/{toy_id}
    handlers:
      GET: animal_toy
  - path: /zoo/{category}/animals/{id}/habitats/{habitat_id}/sections/{section_id}
    handlers:
      GET: habitat_section
  - path: /inventory/{warehouse_id}/feeds/{feed_id}/items/{item_id}/batches/{batch_id}
    handlers:
      POST: post_item_batch
  - path: /complex/{a}/{b}/{c}/{d}/{e}/{f}/{g}/{h}/{i}
    handlers:
      GET: complex_many_params
  - path: /zoo/health
    handlers:
      HEAD: health_check
      OPTIONS: supported_ops
      TRACE: trace_route
"#
}

fn build_router() -> Router<Arc<str>> {
    RouteTable::from_yaml_str(example_table())
        .expect("failed to parse route table")
        .build_router()
        .expect("failed to build router")
}

fn bench_route_throughput(c: &mut Criterion) {
    let router = build_router();
    c.bench_function("route_match", |b| {
        let test_paths = [
            (Method::GET, "/zoo/animals/abc"),
            (Method::GET, "/zoo/animals/123/toys/456"),
            (Method::GET, "/zoo/cats/animals/123/habitats/88/sections/5"),
            (Method::POST, "/inventory/1/feeds/2/items/3/batches/4"),
            (Method::GET, "/complex/1/2/3/4/5/6/7/8/9"),
        ];
        b.iter(|| {
            for (method, path) in test_paths.iter() {
                let res = router.resolve(path, method);
                black_box(&res);
            }
        })
    });
}

fn bench_route_miss(c: &mut Criterion) {
    let router = build_router();
    c.bench_function("route_miss", |b| {
        b.iter(|| {
            let res = router.resolve(black_box("/zoo/animals/abc/unknown"), &Method::GET);
            black_box(&res);
        })
    });
}

criterion_group!(benches, bench_route_throughput, bench_route_miss);
criterion_main!(benches);
