//! 全路径枚举模块
//!
//! 回溯式深度优先搜索，枚举两个顶点之间的全部简单路径（路径中顶点不重复）。
//!
//! 流式接口在后台线程中执行搜索，通过有界通道逐条交付路径；
//! 消费者丢弃 [`PathStream`] 或调用 [`PathStream::cancel`] 后，
//! 生产者会在下一次扩展前或下一次发送时停止，不会阻塞在通道上。

use std::collections::HashSet;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::config::Config;
use crate::core::graph::{
    DirectedGraphArcsReader, MixedGraphConnectionsReader, UndirectedGraphEdgesReader,
};
use crate::services::algorithm::neighbours::{
    DirectedNeighbours, MixedNeighbours, NeighbourExtractor, UndirectedNeighbours,
};

/// 流式枚举选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathStreamOptions {
    /// 通道容量，0 表示生产者与消费者逐条交接
    pub buffer: usize,
}

impl PathStreamOptions {
    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }
}

impl From<&Config> for PathStreamOptions {
    fn from(config: &Config) -> Self {
        Self {
            buffer: config.path_stream_buffer,
        }
    }
}

/// 回溯搜索状态
///
/// `on_stack` 标记当前路径上的顶点：扩展前标记，返回后清除。
/// 这保证了产出的每条路径都是简单路径。
struct Backtrack<'a, E: NeighbourExtractor + ?Sized, F> {
    extractor: &'a E,
    to: &'a E::Vertex,
    on_stack: HashSet<E::Vertex>,
    path: Vec<E::Vertex>,
    cancelled: Option<&'a AtomicBool>,
    emit: F,
}

impl<'a, E, F> Backtrack<'a, E, F>
where
    E: NeighbourExtractor + ?Sized,
    F: FnMut(Vec<E::Vertex>) -> ControlFlow<()>,
{
    fn new(extractor: &'a E, to: &'a E::Vertex, cancelled: Option<&'a AtomicBool>, emit: F) -> Self {
        Self {
            extractor,
            to,
            on_stack: HashSet::new(),
            path: Vec::with_capacity(10),
            cancelled,
            emit,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
            .is_some_and(|flag| flag.load(Ordering::Acquire))
    }

    fn visit(&mut self, node: E::Vertex) -> ControlFlow<()> {
        if self.on_stack.contains(&node) {
            return ControlFlow::Continue(());
        }

        self.path.push(node.clone());

        if node == *self.to {
            // 起点即终点时不产出零长度路径
            let flow = if self.path.len() > 1 {
                (self.emit)(self.path.clone())
            } else {
                ControlFlow::Continue(())
            };
            self.path.pop();
            return flow;
        }

        if self.is_cancelled() {
            self.path.pop();
            return ControlFlow::Break(());
        }

        self.on_stack.insert(node.clone());
        let flow = self.expand(&node);
        self.on_stack.remove(&node);
        self.path.pop();
        flow
    }

    fn expand(&mut self, node: &E::Vertex) -> ControlFlow<()> {
        let extractor = self.extractor;
        for next in extractor.all_neighbours(node) {
            self.visit(next)?;
        }
        ControlFlow::Continue(())
    }
}

/// 在当前线程上枚举 `from` 到 `to` 的全部简单路径
///
/// 结果与 [`get_all_paths`] 的产出顺序一致（深度优先发现顺序）。
/// `from == to` 时返回空列表。
pub fn find_all_paths<E>(extractor: &E, from: &E::Vertex, to: &E::Vertex) -> Vec<Vec<E::Vertex>>
where
    E: NeighbourExtractor + ?Sized,
{
    let mut all_paths = Vec::new();
    let mut search = Backtrack::new(extractor, to, None, |path| {
        all_paths.push(path);
        ControlFlow::Continue(())
    });
    let _ = search.visit(from.clone());
    drop(search);

    log::debug!(
        "全路径枚举完成: {:?} -> {:?}, 共 {} 条",
        from,
        to,
        all_paths.len()
    );
    all_paths
}

/// 后台枚举的路径流
///
/// 一次性：耗尽后不能重新开始，需要重新调用 [`get_all_paths`]。
///
/// 邻居提取器发生 panic 时生产者线程退出，迭代器随之结束，
/// 与正常枚举完毕无法区分；只有 [`join`](Self::join) 返回 `false` 能反映这种情况。
pub struct PathStream<V> {
    receiver: Option<Receiver<Vec<V>>>,
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl<V> PathStream<V> {
    /// 停止消费，通知生产者退出
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        // 丢弃接收端，阻塞在发送上的生产者立即返回
        self.receiver = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// 等待生产者线程结束
    ///
    /// 未耗尽的流会先被取消，剩余路径不再产出。
    /// 返回 `false` 表示生产者线程发生了 panic。
    pub fn join(mut self) -> bool {
        if self.receiver.is_some() {
            self.cancel();
        }
        match self.handle.take() {
            Some(handle) => handle.join().is_ok(),
            None => true,
        }
    }
}

impl<V> Iterator for PathStream<V> {
    type Item = Vec<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.as_ref()?.recv().ok()
    }
}

impl<V> Drop for PathStream<V> {
    fn drop(&mut self) {
        if self.receiver.is_some() {
            self.cancel();
        }
    }
}

/// 在后台线程中枚举 `from` 到 `to` 的全部简单路径
pub fn get_all_paths<E>(extractor: E, from: E::Vertex, to: E::Vertex) -> PathStream<E::Vertex>
where
    E: NeighbourExtractor + Send + 'static,
    E::Vertex: Send + 'static,
{
    get_all_paths_with(extractor, from, to, PathStreamOptions::default())
}

/// 带选项的 [`get_all_paths`]
pub fn get_all_paths_with<E>(
    extractor: E,
    from: E::Vertex,
    to: E::Vertex,
    options: PathStreamOptions,
) -> PathStream<E::Vertex>
where
    E: NeighbourExtractor + Send + 'static,
    E::Vertex: Send + 'static,
{
    let (sender, receiver) = mpsc::sync_channel(options.buffer);
    let cancelled = Arc::new(AtomicBool::new(false));
    let token = Arc::clone(&cancelled);

    let handle = thread::spawn(move || {
        log::debug!("全路径枚举开始: {:?} -> {:?}", from, to);

        let mut emitted = 0usize;
        let mut search = Backtrack::new(&extractor, &to, Some(token.as_ref()), |path| {
            if sender.send(path).is_err() {
                return ControlFlow::Break(());
            }
            emitted += 1;
            ControlFlow::Continue(())
        });
        let flow = search.visit(from.clone());
        drop(search);

        if flow.is_break() {
            log::debug!(
                "全路径枚举被取消: {:?} -> {:?}, 已产出 {} 条",
                from,
                to,
                emitted
            );
        } else {
            log::debug!(
                "全路径枚举完成: {:?} -> {:?}, 共 {} 条",
                from,
                to,
                emitted
            );
        }
    });

    PathStream {
        receiver: Some(receiver),
        cancelled,
        handle: Some(handle),
    }
}

/// 有向图全路径枚举
pub fn get_all_directed_paths<G>(graph: G, from: G::Vertex, to: G::Vertex) -> PathStream<G::Vertex>
where
    G: DirectedGraphArcsReader + Send + 'static,
    G::Vertex: Send + 'static,
{
    get_all_paths(DirectedNeighbours::new(graph), from, to)
}

/// 无向图全路径枚举
pub fn get_all_undirected_paths<G>(
    graph: G,
    from: G::Vertex,
    to: G::Vertex,
) -> PathStream<G::Vertex>
where
    G: UndirectedGraphEdgesReader + Send + 'static,
    G::Vertex: Send + 'static,
{
    get_all_paths(UndirectedNeighbours::new(graph), from, to)
}

/// 混合图全路径枚举，弧和边同时可达的顶点会产生重复路径
pub fn get_all_mixed_paths<G>(
    graph: G,
    from: <G as DirectedGraphArcsReader>::Vertex,
    to: <G as DirectedGraphArcsReader>::Vertex,
) -> PathStream<<G as DirectedGraphArcsReader>::Vertex>
where
    G: MixedGraphConnectionsReader + Send + 'static,
    <G as DirectedGraphArcsReader>::Vertex: Send + 'static,
{
    get_all_paths(MixedNeighbours::new(graph), from, to)
}
